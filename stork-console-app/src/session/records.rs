//! List / remove / clear actions shared by the account and proxy menus

use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::services::{RecordService, AFFIRMATIVE_TOKEN};
use stork_console_core::RecordCodec;

use super::Step;
use crate::console::Console;

/// How a store is named in messages
pub(super) struct Noun {
    pub singular: &'static str,
    pub plural: &'static str,
    pub title: &'static str,
}

pub(super) const ACCOUNT: Noun = Noun {
    singular: "account",
    plural: "accounts",
    title: "Account",
};

pub(super) const PROXY: Noun = Noun {
    singular: "proxy",
    plural: "proxies",
    title: "Proxy",
};

/// Print the numbered list, or the empty notice.
///
/// Returns `false` when the store is empty.
pub(super) async fn list<R, W, T>(
    console: &mut Console<R, W>,
    store: &RecordService<T>,
    noun: &Noun,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    T: RecordCodec + 'static,
{
    if store.is_empty() {
        console
            .notice(&format!("The {} list is empty", noun.singular))
            .await?;
        return Ok(false);
    }

    console.blank().await?;
    console
        .notice(&format!("{} list:", noun.title))
        .await?;
    for line in store.numbered_labels() {
        console.say(line).await?;
    }
    Ok(true)
}

pub(super) async fn remove<R, W, T>(
    console: &mut Console<R, W>,
    store: &mut RecordService<T>,
    noun: &Noun,
) -> io::Result<Step>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    T: RecordCodec + 'static,
{
    if !list(console, store, noun).await? {
        return Ok(Step::Continue);
    }

    let Some(answer) = console
        .prompt(&format!("Number of the {} to remove: ", noun.singular))
        .await?
    else {
        return Ok(Step::Closed);
    };

    match store.remove_by_input(&answer).await {
        Ok(removed) => {
            log::info!("{} removed: {}", noun.title, removed.display_label());
            console
                .success(&format!("{} removed", noun.title))
                .await?;
        }
        Err(e) if e.is_expected() => {
            console
                .report(&format!("Invalid {} number", noun.singular), &e)
                .await?;
        }
        Err(e) => {
            console
                .report(&format!("Failed to remove {}", noun.singular), &e)
                .await?;
        }
    }
    Ok(Step::Continue)
}

pub(super) async fn clear<R, W, T>(
    console: &mut Console<R, W>,
    store: &mut RecordService<T>,
    noun: &Noun,
) -> io::Result<Step>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    T: RecordCodec + 'static,
{
    let Some(answer) = console
        .prompt(&format!(
            "Are you sure you want to remove all {}? ({AFFIRMATIVE_TOKEN}/no): ",
            noun.plural
        ))
        .await?
    else {
        return Ok(Step::Closed);
    };

    match store.clear_if_confirmed(&answer).await {
        Ok(Some(count)) => {
            log::info!("Cleared {count} {}", noun.plural);
            console
                .success(&format!("All {} removed", noun.plural))
                .await?;
        }
        Ok(None) => {}
        Err(e) => {
            console
                .report(&format!("Failed to clear {}", noun.plural), &e)
                .await?;
        }
    }
    Ok(Step::Continue)
}
