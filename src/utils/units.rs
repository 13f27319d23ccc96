// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use alloy_primitives::U256;

use crate::errors::ValidationError;

fn scale(decimals: u8) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(decimals))
}

/// Render a base-unit amount as a decimal token amount, e.g. `1.5` for
/// `1_500_000_000_000_000_000` with 18 decimals. Trailing zeros are trimmed.
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let (whole, remainder) = match scale(decimals) {
        Some(divisor) => (amount / divisor, amount % divisor),
        // Past 77 decimals the scale exceeds U256, so every amount is below one token.
        None => (U256::ZERO, amount),
    };
    if remainder.is_zero() {
        return whole.to_string();
    }

    let fraction = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Inverse of [`format_token_amount`].
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<U256, ValidationError> {
    let invalid = || ValidationError::InvalidAmount {
        field: "token",
        value: amount.to_string(),
    };

    let trimmed = amount.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(invalid());
    }

    let divisor = scale(decimals).ok_or_else(invalid)?;
    let whole = U256::from_str_radix(whole, 10).map_err(|_| invalid())?;
    let mut total = whole.checked_mul(divisor).ok_or_else(invalid)?;

    if !fraction.is_empty() {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        let fraction = U256::from_str_radix(&padded, 10).map_err(|_| invalid())?;
        total = total.checked_add(fraction).ok_or_else(invalid)?;
    }
    Ok(total)
}
