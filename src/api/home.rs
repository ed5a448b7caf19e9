// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Home page endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::gateway::Gateway;

pub const BANNER_PATH: &str = "/home/banner";
pub const NEW_PATH: &str = "/home/new";
pub const HOT_PATH: &str = "/home/hot";
pub const GOODS_PATH: &str = "/home/goods";

/// Where a banner set is shown
pub struct DistributionSite;

impl DistributionSite {
    /// Home page carousel
    pub const HOME: &'static str = "1";
    /// Category page carousel
    pub const CATEGORY: &'static str = "2";
}

/// Banner query; the site defaults to the home page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_site: Option<String>,
}

impl BannerParams {
    /// Params for an explicit distribution site
    pub fn site(site: impl Into<String>) -> Self {
        Self {
            distribution_site: Some(site.into()),
        }
    }

    /// Site actually sent to the backend
    pub fn effective_site(&self) -> &str {
        self.distribution_site
            .as_deref()
            .unwrap_or(DistributionSite::HOME)
    }
}

/// Fetch the banner set for a distribution site
pub async fn get_banner(gateway: &Gateway, params: BannerParams) -> Result<Value> {
    gateway
        .get(BANNER_PATH, [("distributionSite", params.effective_site())])
        .await
}

/// Fetch the new-arrivals list
pub async fn find_new(gateway: &Gateway) -> Result<Value> {
    gateway.get(NEW_PATH, no_query()).await
}

/// Fetch popular items
pub async fn get_hot(gateway: &Gateway) -> Result<Value> {
    gateway.get(HOT_PATH, no_query()).await
}

/// Fetch every product module shown on the home page
pub async fn get_goods(gateway: &Gateway) -> Result<Value> {
    gateway.get(GOODS_PATH, no_query()).await
}

fn no_query() -> [(&'static str, &'static str); 0] {
    []
}

/// Borrowed facade over the home endpoints
#[derive(Clone, Copy)]
pub struct HomeApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> HomeApi<'a> {
    /// Wrap a gateway
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// See [`get_banner`]
    pub async fn banner(&self, params: BannerParams) -> Result<Value> {
        get_banner(self.gateway, params).await
    }

    /// See [`find_new`]
    pub async fn new_arrivals(&self) -> Result<Value> {
        find_new(self.gateway).await
    }

    /// See [`get_hot`]
    pub async fn hot(&self) -> Result<Value> {
        get_hot(self.gateway).await
    }

    /// See [`get_goods`]
    pub async fn goods(&self) -> Result<Value> {
        get_goods(self.gateway).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_site_defaults_to_home() {
        assert_eq!(BannerParams::default().effective_site(), "1");
        assert_eq!(
            BannerParams::site(DistributionSite::CATEGORY).effective_site(),
            "2"
        );
    }

    #[test]
    fn test_banner_params_deserialize() {
        let params: BannerParams = serde_json::from_str(r#"{"distributionSite":"2"}"#).unwrap();
        assert_eq!(params.effective_site(), "2");

        let params: BannerParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.effective_site(), "1");
    }
}
