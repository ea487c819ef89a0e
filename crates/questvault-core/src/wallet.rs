//! Wallet connectivity capability.
//!
//! Real wallet plumbing (connectors, RPC, chain switching) is external; the
//! core defines the seam and the chain catalog, plus a demo wallet that
//! connects instantly without touching a network. The store holds none of
//! this directly — balances arrive through `set_balance`.

use serde::Serialize;

pub const MAINNET_CHAIN_ID: u64 = 8217;
pub const TESTNET_CHAIN_ID: u64 = 1001;

/// Connector ids the app offers.
pub const CONNECTORS: &[&str] = &["injected", "metaMask", "walletConnect"];

/// Static description of a supported chain.
#[derive(Debug, Clone, Serialize)]
pub struct ChainInfo {
    pub id: u64,
    pub name: &'static str,
    pub currency_symbol: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

/// All chains the app knows how to talk to.
pub fn chains() -> Vec<ChainInfo> {
    vec![
        ChainInfo {
            id: TESTNET_CHAIN_ID,
            name: "Kairos Testnet",
            currency_symbol: "KAIA",
            rpc_url: "https://public-en-kairos.node.kaia.io",
            explorer_url: "https://kairos.kaiascope.com",
        },
        ChainInfo {
            id: MAINNET_CHAIN_ID,
            name: "Kaia Mainnet",
            currency_symbol: "KAIA",
            rpc_url: "https://public-en.node.kaia.io",
            explorer_url: "https://kaiascope.com",
        },
    ]
}

pub fn chain_info(id: u64) -> Option<ChainInfo> {
    chains().into_iter().find(|c| c.id == id)
}

/// Errors a wallet operation can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    UnknownConnector(String),
    UnsupportedChain(u64),
    NotConnected,
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletError::UnknownConnector(id) => write!(f, "unknown connector: {}", id),
            WalletError::UnsupportedChain(id) => write!(f, "unsupported chain id: {}", id),
            WalletError::NotConnected => write!(f, "wallet not connected"),
        }
    }
}

impl std::error::Error for WalletError {}

/// Seam for wallet connectivity.
pub trait WalletProvider {
    fn connected(&self) -> bool;
    /// Checksummed address, `None` while disconnected.
    fn address(&self) -> Option<&str>;
    fn chain_id(&self) -> u64;

    fn connect(&mut self, connector_id: &str) -> Result<(), WalletError>;
    fn disconnect(&mut self);
    fn switch_chain(&mut self, target_id: u64) -> Result<(), WalletError>;
}

/// Networkless wallet for demo mode: any known connector "connects" to a
/// fixed demo address on the configured chain.
pub struct DemoWallet {
    connected: bool,
    chain_id: u64,
    address: String,
}

impl DemoWallet {
    pub fn new(chain_id: u64) -> Self {
        Self {
            connected: false,
            chain_id,
            address: "0xDEAD0000000000000000000000000000DemoVau1".to_string(),
        }
    }
}

impl Default for DemoWallet {
    fn default() -> Self {
        Self::new(TESTNET_CHAIN_ID)
    }
}

impl WalletProvider for DemoWallet {
    fn connected(&self) -> bool {
        self.connected
    }

    fn address(&self) -> Option<&str> {
        if self.connected {
            Some(&self.address)
        } else {
            None
        }
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn connect(&mut self, connector_id: &str) -> Result<(), WalletError> {
        if !CONNECTORS.contains(&connector_id) {
            return Err(WalletError::UnknownConnector(connector_id.to_string()));
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn switch_chain(&mut self, target_id: u64) -> Result<(), WalletError> {
        if chain_info(target_id).is_none() {
            return Err(WalletError::UnsupportedChain(target_id));
        }
        if !self.connected {
            return Err(WalletError::NotConnected);
        }
        self.chain_id = target_id;
        Ok(())
    }
}
