// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Backend endpoints
//!
//! Each function issues one request through the [`Gateway`](crate::Gateway)
//! and returns its unwrapped payload. No validation, mapping or caching
//! happens here.

pub mod home;

pub use home::{find_new, get_banner, get_goods, get_hot, BannerParams, DistributionSite, HomeApi};
