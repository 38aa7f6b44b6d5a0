//! Remote service endpoints, overridable via environment variables.

/// Zero-based offset of the first (and only) history page requested.
pub const DEPLOY_HISTORY_OFFSET: u32 = 0;
/// Page size of the history request.
pub const DEPLOY_HISTORY_FETCH_SIZE: u32 = 50;

/// Base URLs and chain identifier for the remote compiler and verifier
/// services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub compiler_base: String,
    pub verifier_base: String,
    pub chain_id: String,
}

impl Endpoints {
    /// Reads the endpoint configuration from the environment, falling back to
    /// the public services.
    pub fn from_env() -> Self {
        const DEFAULT_COMPILER: &str = "https://api.welldonestudio.io";
        const DEFAULT_VERIFIER: &str = "https://prod.neutron.compiler.welldonestudio.io";
        const DEFAULT_CHAIN_ID: &str = "testnet";

        Self {
            compiler_base: env_or("NEUTRON_COMPILER_API", DEFAULT_COMPILER),
            verifier_base: env_or("NEUTRON_VERIFIER_API", DEFAULT_VERIFIER),
            chain_id: env_or("NEUTRON_CHAIN_ID", DEFAULT_CHAIN_ID),
        }
    }

    pub fn deploy_histories_url(&self) -> String {
        format!(
            "{}/compiler/neutron-deploy-histories?chainId={}&offset={}&fetchSize={}",
            self.compiler_base, self.chain_id, DEPLOY_HISTORY_OFFSET, DEPLOY_HISTORY_FETCH_SIZE
        )
    }

    pub fn verification_url(&self) -> String {
        format!("{}/verification/neutron", self.verifier_base)
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
