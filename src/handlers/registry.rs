// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{HandlerError, ValidationError};
use crate::handlers::types::{Handler, HandlerUpdate};
use crate::observability::messages::handler::{HandlerRegistered, HandlerRemoved};
use crate::observability::messages::StructuredLog;
use crate::utils::is_valid_address;

/// In-memory list of the handlers a user has deployed, in insertion order.
///
/// Addresses are compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: Vec<Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, address: &str) -> Option<usize> {
        self.handlers
            .iter()
            .position(|h| h.address.eq_ignore_ascii_case(address))
    }

    pub fn add(&mut self, handler: Handler) -> Result<(), HandlerError> {
        if !is_valid_address(&handler.address) {
            return Err(ValidationError::InvalidAddress {
                field: "handler",
                value: handler.address,
            }
            .into());
        }
        handler.validate()?;
        if self.position(&handler.address).is_some() {
            return Err(HandlerError::Duplicate(handler.address));
        }
        HandlerRegistered {
            address: &handler.address,
            name: &handler.name,
            network: &handler.network,
        }
        .log();
        self.handlers.push(handler);
        Ok(())
    }

    pub fn get(&self, address: &str) -> Option<&Handler> {
        self.position(address).map(|i| &self.handlers[i])
    }

    pub fn get_mut(&mut self, address: &str) -> Option<&mut Handler> {
        let index = self.position(address)?;
        self.handlers.get_mut(index)
    }

    pub fn update(
        &mut self,
        address: &str,
        update: HandlerUpdate,
    ) -> Result<&Handler, HandlerError> {
        let handler = self
            .get_mut(address)
            .ok_or_else(|| HandlerError::NotFound(address.to_string()))?;
        handler.apply(update)?;
        Ok(&*handler)
    }

    pub fn remove(&mut self, address: &str) -> Result<Handler, HandlerError> {
        let index = self
            .position(address)
            .ok_or_else(|| HandlerError::NotFound(address.to_string()))?;
        let removed = self.handlers.remove(index);
        HandlerRemoved {
            address: &removed.address,
        }
        .log();
        Ok(removed)
    }

    pub fn list(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::types::{HandlerStats, HandlerStatus};
    use chrono::Utc;

    fn handler(address: &str) -> Handler {
        Handler {
            address: address.to_string(),
            name: "vault".to_string(),
            vault_address: "0x2222222222222222222222222222222222222222".to_string(),
            compound_token: "WETH".to_string(),
            reward_token: "REACT".to_string(),
            threshold: 10.0,
            network: "sepolia".to_string(),
            status: HandlerStatus::Active,
            deployed_at: Utc::now(),
            stats: HandlerStats::default(),
        }
    }

    const ADDR: &str = "0xAbCdEfabcdefabcdefabcdefabcdefabcdefABCD";

    #[test]
    fn test_add_and_get_ignore_case() {
        let mut registry = HandlerRegistry::new();
        registry.add(handler(ADDR)).unwrap();
        assert!(registry.get(&ADDR.to_lowercase()).is_some());
        assert_eq!(
            registry.add(handler(&ADDR.to_uppercase().replacen("0X", "0x", 1))),
            Err(HandlerError::Duplicate(ADDR.to_uppercase().replacen("0X", "0x", 1)))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_address() {
        let mut registry = HandlerRegistry::new();
        assert!(matches!(
            registry.add(handler("0x123")),
            Err(HandlerError::Invalid(ValidationError::InvalidAddress { .. }))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_threshold() {
        let mut registry = HandlerRegistry::new();
        for threshold in [-5.0, f64::NAN] {
            let mut bad = handler(ADDR);
            bad.threshold = threshold;
            assert!(matches!(
                registry.add(bad),
                Err(HandlerError::Invalid(ValidationError::InvalidAmount {
                    field: "threshold",
                    ..
                }))
            ));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_and_remove() {
        let mut registry = HandlerRegistry::new();
        registry.add(handler(ADDR)).unwrap();
        let updated = registry
            .update(
                ADDR,
                HandlerUpdate {
                    status: Some(HandlerStatus::Paused),
                    ..HandlerUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, HandlerStatus::Paused);

        let removed = registry.remove(&ADDR.to_lowercase()).unwrap();
        assert_eq!(removed.address, ADDR);
        assert!(registry.list().is_empty());
        assert_eq!(
            registry.remove(ADDR),
            Err(HandlerError::NotFound(ADDR.to_string()))
        );
        assert!(matches!(
            registry.update(ADDR, HandlerUpdate::default()),
            Err(HandlerError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut registry = HandlerRegistry::new();
        let first = format!("0x{}", "1".repeat(40));
        let second = format!("0x{}", "2".repeat(40));
        registry.add(handler(&second)).unwrap();
        registry.add(handler(&first)).unwrap();
        let addresses: Vec<_> = registry.list().iter().map(|h| h.address.as_str()).collect();
        assert_eq!(addresses, vec![second.as_str(), first.as_str()]);
    }
}
