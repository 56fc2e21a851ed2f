//! Styles module: list, retrieve, create and update style documents
//! owned by an account.

mod types;

pub use types::{
    Alignment, Anchor, IconTextFit, Justify, Layer, LayerType, Layout, Light, LineCap,
    LineJoin, Paint, PropertyValue, Resampling, Style, SymbolPlacement, SymbolZOrder,
    TextTransform, Transition, VariableAnchor, Visibility, WritingMode,
};

use crate::base::{ApiError, AsyncHttpClient, Base};
use std::sync::Arc;
use tracing::debug;

/// Options for listing an account's styles.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Maximum number of styles to return.
    pub limit: Option<u32>,
    /// Style id to start listing after, for pagination.
    pub start: Option<String>,
}

impl ListOpts {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(start) = &self.start {
            pairs.push(("start", start.clone()));
        }
        pairs
    }
}

/// Styles API wrapper.
pub struct Styles<C> {
    base: Arc<Base<C>>,
}

impl<C: AsyncHttpClient> Styles<C> {
    pub fn new(base: Arc<Base<C>>) -> Self {
        Self { base }
    }

    /// Lists the styles owned by the account.
    pub async fn list(&self, username: &str, opts: &ListOpts) -> Result<Vec<Style>, ApiError> {
        debug!(username, "list styles");
        let path = format!("styles/v1/{}", username);
        self.base.get_json(&path, &opts.query_pairs()).await
    }

    /// Retrieves one style by id.
    pub async fn retrieve(&self, username: &str, style_id: &str) -> Result<Style, ApiError> {
        debug!(username, style_id, "retrieve style");
        let path = format!("styles/v1/{}/{}", username, style_id);
        self.base.get_json(&path, &[]).await
    }

    /// Creates a new style and returns it with its API-assigned fields
    /// (id, owner) populated.
    pub async fn create(&self, username: &str, style: &Style) -> Result<Style, ApiError> {
        debug!(username, "create style");
        let path = format!("styles/v1/{}", username);
        self.base.post_json(&path, style).await
    }

    /// Updates an existing style and returns the stored result.
    pub async fn update(
        &self,
        username: &str,
        style_id: &str,
        style: &Style,
    ) -> Result<Style, ApiError> {
        debug!(username, style_id, "update style");
        let path = format!("styles/v1/{}/{}", username, style_id);
        self.base.patch_json(&path, style).await
    }
}
