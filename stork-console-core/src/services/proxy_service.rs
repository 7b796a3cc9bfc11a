//! Proxy store service

use crate::error::CoreResult;
use crate::services::RecordService;
use crate::types::{ProxyEntryPolicy, ProxyKind, ProxyRecord};

/// Open proxy store
pub type ProxyService = RecordService<ProxyRecord>;

impl RecordService<ProxyRecord> {
    /// Validate operator input for `kind` under `policy` and append it
    pub async fn add_proxy(
        &mut self,
        raw: &str,
        kind: ProxyKind,
        policy: ProxyEntryPolicy,
    ) -> CoreResult<&ProxyRecord> {
        let proxy = ProxyRecord::from_input(raw, kind, policy)?;
        let proxy = self.add(proxy).await?;
        log::info!("{} proxy added: {proxy}", kind.label());
        Ok(proxy)
    }
}
