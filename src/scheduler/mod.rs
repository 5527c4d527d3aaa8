//! Cron jobs running alongside the gateway client.

pub mod premium_refresh;
