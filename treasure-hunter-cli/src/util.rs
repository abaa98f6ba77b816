use anyhow::{Result, anyhow};

use crate::logic::GameplayStrategy;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Resolve strategy names; `all` expands to every built-in strategy.
pub fn resolve_strategies(tokens: &[String]) -> Result<Vec<GameplayStrategy>> {
    if tokens.is_empty() || tokens.iter().any(|t| t.eq_ignore_ascii_case("all")) {
        return Ok(GameplayStrategy::ALL.to_vec());
    }
    let mut strategies = Vec::with_capacity(tokens.len());
    for token in tokens {
        let strategy = token.parse::<GameplayStrategy>().map_err(|err| anyhow!(err))?;
        if !strategies.contains(&strategy) {
            strategies.push(strategy);
        }
    }
    Ok(strategies)
}
