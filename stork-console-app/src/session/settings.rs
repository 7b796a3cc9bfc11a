use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::services::SettingsField;
use stork_console_core::types::ConfigRecord;

use super::{EditorSession, MenuState, Step};
use crate::console::Console;

impl<R, W> EditorSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Walk every field once, then save the merged record
    pub(super) async fn settings_form(&mut self) -> io::Result<MenuState> {
        let config_service = self.ctx.config_service();
        let mut config = match config_service.load().await {
            Ok(config) => config,
            Err(e) => {
                self.console.report("Failed to load settings", &e).await?;
                return Ok(MenuState::Main);
            }
        };

        self.console.blank().await?;
        self.console.notice("Settings").await?;

        if fill_settings(&mut self.console, &mut config, &SettingsField::ALL).await?
            == Step::Closed
        {
            log::info!("Input closed during settings, nothing saved");
            return Ok(MenuState::Exit);
        }

        match config_service.save(&config).await {
            Ok(()) => self.console.success("Configuration saved").await?,
            Err(e) => self.console.report("Configuration not saved", &e).await?,
        }
        Ok(MenuState::Main)
    }
}

/// Prompt for each of `fields`, merging answers into `config`.
///
/// A blank answer keeps the shown value. An invalid answer is reported and
/// the field keeps its value; the form moves on.
pub(crate) async fn fill_settings<R, W>(
    console: &mut Console<R, W>,
    config: &mut ConfigRecord,
    fields: &[SettingsField],
) -> io::Result<Step>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let mut provider_header_shown = false;

    for &field in fields {
        if field.is_identity_provider() && !provider_header_shown {
            console.blank().await?;
            console
                .notice("Identity provider settings (optional)")
                .await?;
            console.hint("Leave blank to keep the current value").await?;
            provider_header_shown = true;
        }

        let current = field.current(config);
        let Some(answer) = console
            .prompt(&format!("{} [{current}]: ", field.label()))
            .await?
        else {
            return Ok(Step::Closed);
        };

        match field.apply(config, &answer) {
            Ok(true) => log::debug!("{field:?} updated"),
            Ok(false) => {}
            Err(e) => {
                console
                    .report(&format!("Invalid value, keeping {current}"), &e)
                    .await?;
            }
        }
    }

    Ok(Step::Continue)
}
