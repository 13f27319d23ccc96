// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deployment::HandlerDeploymentResult;
use crate::errors::ValidationError;
use crate::observability::messages::handler::CompoundRecorded;
use crate::observability::messages::StructuredLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerStatus {
    #[default]
    Active,
    Paused,
    Error,
}

/// Running totals for one handler. Amounts are in USD.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerStats {
    pub total_compounds: u64,
    pub gross_yield: f64,
    pub fees_paid: f64,
    /// Always `gross_yield - fees_paid`
    pub net_yield: f64,
    pub last_compound: Option<DateTime<Utc>>,
}

/// What the user chose when deploying an auto-compound handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerProfile {
    pub name: String,
    pub vault_address: String,
    pub compound_token: String,
    pub reward_token: String,
    /// Reward balance, in USD, that triggers a compound
    pub threshold: f64,
}

/// A deployed auto-compound handler as tracked by the dApp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handler {
    pub address: String,
    pub name: String,
    pub vault_address: String,
    pub compound_token: String,
    pub reward_token: String,
    pub threshold: f64,
    pub network: String,
    pub status: HandlerStatus,
    pub deployed_at: DateTime<Utc>,
    pub stats: HandlerStats,
}

/// Partial update; `None` fields are left alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub status: Option<HandlerStatus>,
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount {
            field,
            value: value.to_string(),
        })
    }
}

impl Handler {
    /// Fails when the profile's threshold is negative or not finite.
    pub fn from_deployment(
        result: &HandlerDeploymentResult,
        profile: HandlerProfile,
    ) -> Result<Self, ValidationError> {
        check_amount("threshold", profile.threshold)?;
        Ok(Self {
            address: result.address.clone(),
            name: profile.name,
            vault_address: profile.vault_address,
            compound_token: profile.compound_token,
            reward_token: profile.reward_token,
            threshold: profile.threshold,
            network: result.network.clone(),
            status: HandlerStatus::Active,
            deployed_at: result.deployment_time,
            stats: HandlerStats::default(),
        })
    }

    /// Threshold and running totals must all be finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount("threshold", self.threshold)?;
        check_amount("gross yield", self.stats.gross_yield)?;
        check_amount("fee", self.stats.fees_paid)
    }

    /// Add one compound to the stats. Amounts must be finite and
    /// non-negative.
    pub fn record_compound(
        &mut self,
        gross: f64,
        fee: f64,
        at: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        check_amount("gross yield", gross)?;
        check_amount("fee", fee)?;

        let stats = &mut self.stats;
        stats.total_compounds += 1;
        stats.gross_yield += gross;
        stats.fees_paid += fee;
        stats.net_yield = stats.gross_yield - stats.fees_paid;
        stats.last_compound = Some(at);

        CompoundRecorded {
            address: &self.address,
            total_compounds: stats.total_compounds,
            net_yield: stats.net_yield,
        }
        .log();
        Ok(())
    }

    pub fn apply(&mut self, update: HandlerUpdate) -> Result<(), ValidationError> {
        if let Some(threshold) = update.threshold {
            check_amount("threshold", threshold)?;
            self.threshold = threshold;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    /// Reward balance as a percentage of the threshold, rounded. Goes past
    /// 100 once the threshold is exceeded; 0 when no threshold is set.
    pub fn threshold_progress(&self, balance_usd: f64) -> u32 {
        if self.threshold <= 0.0 || !balance_usd.is_finite() || balance_usd <= 0.0 {
            return 0;
        }
        let percent = (balance_usd / self.threshold * 100.0).round();
        if percent >= u32::MAX as f64 {
            u32::MAX
        } else {
            percent as u32
        }
    }

    /// Active handlers compound once the balance reaches a positive threshold.
    pub fn should_compound(&self, balance_usd: f64) -> bool {
        self.status == HandlerStatus::Active
            && self.threshold > 0.0
            && balance_usd >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::HandlerKind;

    fn handler(threshold: f64) -> Handler {
        Handler {
            address: "0x1111111111111111111111111111111111111111".to_string(),
            name: "ETH vault".to_string(),
            vault_address: "0x2222222222222222222222222222222222222222".to_string(),
            compound_token: "WETH".to_string(),
            reward_token: "REACT".to_string(),
            threshold,
            network: "sepolia".to_string(),
            status: HandlerStatus::Active,
            deployed_at: Utc::now(),
            stats: HandlerStats::default(),
        }
    }

    #[test]
    fn test_record_compound_keeps_net_yield() {
        let mut h = handler(10.0);
        let at = Utc::now();
        h.record_compound(12.5, 0.5, at).unwrap();
        h.record_compound(7.5, 1.0, at).unwrap();
        assert_eq!(h.stats.total_compounds, 2);
        assert_eq!(h.stats.gross_yield, 20.0);
        assert_eq!(h.stats.fees_paid, 1.5);
        assert_eq!(h.stats.net_yield, h.stats.gross_yield - h.stats.fees_paid);
        assert_eq!(h.stats.last_compound, Some(at));
    }

    #[test]
    fn test_record_compound_rejects_bad_amounts() {
        let mut h = handler(10.0);
        assert!(h.record_compound(-1.0, 0.0, Utc::now()).is_err());
        assert!(h.record_compound(1.0, f64::NAN, Utc::now()).is_err());
        assert_eq!(h.stats, HandlerStats::default());
    }

    #[test]
    fn test_threshold_progress() {
        let h = handler(50.0);
        assert_eq!(h.threshold_progress(0.0), 0);
        assert_eq!(h.threshold_progress(12.4), 25);
        assert_eq!(h.threshold_progress(50.0), 100);
        assert_eq!(h.threshold_progress(75.0), 150);
        assert_eq!(handler(0.0).threshold_progress(10.0), 0);
    }

    #[test]
    fn test_should_compound() {
        let mut h = handler(50.0);
        assert!(!h.should_compound(49.99));
        assert!(h.should_compound(50.0));
        h.status = HandlerStatus::Paused;
        assert!(!h.should_compound(100.0));
        assert!(!handler(0.0).should_compound(100.0));
    }

    #[test]
    fn test_apply_update() {
        let mut h = handler(50.0);
        h.apply(HandlerUpdate {
            threshold: Some(75.0),
            status: Some(HandlerStatus::Paused),
            ..HandlerUpdate::default()
        })
        .unwrap();
        assert_eq!(h.threshold, 75.0);
        assert_eq!(h.status, HandlerStatus::Paused);
        assert_eq!(h.name, "ETH vault");

        assert!(h
            .apply(HandlerUpdate {
                threshold: Some(-5.0),
                ..HandlerUpdate::default()
            })
            .is_err());
        assert_eq!(h.threshold, 75.0);
    }

    #[test]
    fn test_from_deployment() {
        let result = HandlerDeploymentResult {
            kind: HandlerKind::AutoCompound,
            address: "0x3333333333333333333333333333333333333333".to_string(),
            transaction_hash: format!("0x{}", "4".repeat(64)),
            block_number: 1,
            constructor_args: vec![],
            deployment_time: Utc::now(),
            network: "arbitrum".to_string(),
            initialization_data: serde_json::Value::Null,
            verified: false,
            verification: None,
        };
        let h = Handler::from_deployment(
            &result,
            HandlerProfile {
                name: "USDC vault".to_string(),
                vault_address: "0x2222222222222222222222222222222222222222".to_string(),
                compound_token: "USDC".to_string(),
                reward_token: "ARB".to_string(),
                threshold: 25.0,
            },
        )
        .unwrap();
        assert_eq!(h.address, result.address);
        assert_eq!(h.network, "arbitrum");
        assert_eq!(h.deployed_at, result.deployment_time);
        assert_eq!(h.status, HandlerStatus::Active);
        assert_eq!(h.stats.total_compounds, 0);
    }

    #[test]
    fn test_from_deployment_rejects_bad_threshold() {
        let result = HandlerDeploymentResult {
            kind: HandlerKind::AutoCompound,
            address: "0x3333333333333333333333333333333333333333".to_string(),
            transaction_hash: format!("0x{}", "4".repeat(64)),
            block_number: 1,
            constructor_args: vec![],
            deployment_time: Utc::now(),
            network: "arbitrum".to_string(),
            initialization_data: serde_json::Value::Null,
            verified: false,
            verification: None,
        };
        for threshold in [-5.0, f64::NAN, f64::INFINITY] {
            let profile = HandlerProfile {
                name: "USDC vault".to_string(),
                vault_address: "0x2222222222222222222222222222222222222222".to_string(),
                compound_token: "USDC".to_string(),
                reward_token: "ARB".to_string(),
                threshold,
            };
            assert!(matches!(
                Handler::from_deployment(&result, profile),
                Err(ValidationError::InvalidAmount { field: "threshold", .. })
            ));
        }
    }

    #[test]
    fn test_validate() {
        assert!(handler(10.0).validate().is_ok());
        assert!(handler(-1.0).validate().is_err());
        let mut h = handler(10.0);
        h.stats.fees_paid = f64::NAN;
        assert!(h.validate().is_err());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&HandlerStatus::Paused).unwrap(), "\"paused\"");
    }
}
