use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;

/// Validate campaign metadata strings against the account space limits
pub fn validate_campaign_metadata(
    name: &str,
    symbol: &str,
    description: &str,
    icon_uri: &str,
    whitepaper_uri: &str,
) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LEN,
        LaunchpadError::InvalidInput
    );
    require!(
        !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
        LaunchpadError::InvalidInput
    );
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        LaunchpadError::InvalidInput
    );
    require!(icon_uri.len() <= MAX_URI_LEN, LaunchpadError::InvalidInput);
    require!(
        whitepaper_uri.len() <= MAX_URI_LEN,
        LaunchpadError::InvalidInput
    );
    Ok(())
}

/// Resolve a pagination request into an inclusive id window. Campaign ids
/// ascend from 1, so page (offset, limit) covers ids offset+1 ..= end.
/// Returns (first_id, last_id, has_more); an empty window is (0, 0, false).
pub fn page_window(offset: u32, limit: u32, total: u32) -> Result<(u32, u32, bool)> {
    require!(
        limit > 0 && limit <= MAX_PAGE_LIMIT,
        LaunchpadError::InvalidPageBounds
    );
    if offset >= total {
        return Ok((0, 0, false));
    }
    let first = offset
        .checked_add(1)
        .ok_or(LaunchpadError::MathOverflow)?;
    let last = offset.saturating_add(limit).min(total);
    Ok((first, last, last < total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_campaigns_paginate_disjointly() {
        // (0,2) -> ids 1..=2, more to come; (2,2) -> id 3, done
        assert_eq!(page_window(0, 2, 3).unwrap(), (1, 2, true));
        assert_eq!(page_window(2, 2, 3).unwrap(), (3, 3, false));
    }

    #[test]
    fn window_edges() {
        assert_eq!(page_window(3, 2, 3).unwrap(), (0, 0, false));
        assert_eq!(page_window(0, 8, 3).unwrap(), (1, 3, false));
        assert_eq!(page_window(0, 5, 0).unwrap(), (0, 0, false));
        assert!(page_window(0, 0, 3).is_err());
        assert!(page_window(0, MAX_PAGE_LIMIT + 1, 100).is_err());
    }

    #[test]
    fn metadata_limits() {
        assert!(validate_campaign_metadata("Token", "TKN", "", "", "").is_ok());
        assert!(validate_campaign_metadata("", "TKN", "", "", "").is_err());
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_campaign_metadata(&long, "TKN", "", "", "").is_err());
    }
}
