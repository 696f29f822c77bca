//! Blockchain network identification.
//!
//! A [`Network`] is an EIP-155 chain ID with a catalog name attached for
//! logging. The catalog ([`NETWORKS`]) only needs to cover the chains that the
//! explorer endpoint tables reference; unknown chains are still valid networks
//! and report [`UNKNOWN_NETWORK_NAME`].
//!
//! Resolvers obtain their network through [`NetworkSource`], which is the
//! seam between this crate and whatever talks to the chain (a JSON-RPC
//! client, a static configuration value, a test fixture).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// An EIP-155 chain ID (e.g., 100 for Gnosis Chain, 137 for Polygon).
pub type ChainId = u64;

/// Name reported for chain IDs missing from the catalog.
pub const UNKNOWN_NETWORK_NAME: &str = "UNKNOWN";

/// Formats a chain ID as a CAIP-2 identifier.
///
/// Example: `caip2(100)` returns `"eip155:100"`.
#[must_use]
pub fn caip2(chain_id: ChainId) -> String {
    format!("eip155:{chain_id}")
}

/// Parses a CAIP-2 identifier into an EIP-155 chain ID.
///
/// Returns `None` if the input is not a valid `eip155:` prefixed string.
#[must_use]
pub fn parse_caip2(caip: &str) -> Option<ChainId> {
    caip.strip_prefix("eip155:").and_then(|s| s.parse().ok())
}

/// A known network definition: chain ID plus its catalog name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// EIP-155 chain ID.
    pub chain_id: ChainId,
    /// Upper-case catalog name (e.g., `"GNOSIS"`).
    pub name: &'static str,
}

impl NetworkInfo {
    /// Creates a catalog entry.
    #[must_use]
    pub const fn new(chain_id: ChainId, name: &'static str) -> Self {
        Self { chain_id, name }
    }
}

static NAMES_BY_CHAIN_ID: LazyLock<HashMap<ChainId, &'static str>> =
    LazyLock::new(|| NETWORKS.iter().map(|n| (n.chain_id, n.name)).collect());

/// Identifies the blockchain network a resolver and its providers are bound to.
///
/// # Serialization
///
/// Serializes to/from a CAIP-2 string: `"eip155:100"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Network {
    chain_id: ChainId,
}

impl Network {
    /// Creates a network from its EIP-155 chain ID.
    #[must_use]
    pub const fn new(chain_id: ChainId) -> Self {
        Self { chain_id }
    }

    /// Returns the EIP-155 chain ID.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the catalog name, or [`UNKNOWN_NETWORK_NAME`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        NAMES_BY_CHAIN_ID
            .get(&self.chain_id)
            .copied()
            .unwrap_or(UNKNOWN_NETWORK_NAME)
    }

    /// Returns `true` if the chain ID is present in [`NETWORKS`].
    #[must_use]
    pub fn is_known(&self) -> bool {
        NAMES_BY_CHAIN_ID.contains_key(&self.chain_id)
    }

    /// Looks up a network by its catalog name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NETWORKS
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
            .map(|n| Self::new(n.chain_id))
    }
}

impl From<ChainId> for Network {
    fn from(chain_id: ChainId) -> Self {
        Self::new(chain_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.chain_id)
    }
}

/// Error returned when parsing an invalid network string.
#[derive(Debug, thiserror::Error)]
#[error("Invalid network {0}: expected a chain id, `eip155:<chain id>` or a known network name")]
pub struct NetworkFormatError(String);

impl FromStr for Network {
    type Err = NetworkFormatError;

    /// Accepts `eip155:100`, a bare chain ID (`100`) or a catalog name (`gnosis`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        parse_caip2(s)
            .or_else(|| s.parse().ok())
            .map(Self::new)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| NetworkFormatError(s.to_owned()))
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&caip2(self.chain_id))
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// Anything that knows which network it talks to.
///
/// Resolver construction reads the network once; it is never queried again.
pub trait NetworkSource {
    /// Returns the network this source is connected to.
    fn network(&self) -> Network;
}

impl NetworkSource for Network {
    fn network(&self) -> Network {
        *self
    }
}

impl<T: NetworkSource + ?Sized> NetworkSource for &T {
    fn network(&self) -> Network {
        (**self).network()
    }
}

impl<T: NetworkSource + ?Sized> NetworkSource for std::sync::Arc<T> {
    fn network(&self) -> Network {
        (**self).network()
    }
}

/// Ethereum Mainnet chain ID.
pub const MAINNET: ChainId = 1;

/// Sepolia testnet chain ID.
pub const SEPOLIA: ChainId = 11_155_111;

/// Holesky testnet chain ID.
pub const HOLESKY: ChainId = 17000;

/// OP Mainnet chain ID.
pub const OPTIMISM: ChainId = 10;

/// OP Sepolia testnet chain ID.
pub const OP_SEPOLIA_TESTNET: ChainId = 11_155_420;

/// BNB Smart Chain chain ID.
pub const BNB_SMART_CHAIN_MAINNET: ChainId = 56;

/// BNB Smart Chain testnet chain ID.
pub const BNB_SMART_CHAIN_TESTNET: ChainId = 97;

/// Polygon PoS chain ID.
pub const POLYGON: ChainId = 137;

/// Polygon Amoy testnet chain ID.
pub const POLYGON_AMOY: ChainId = 80002;

/// Polygon zkEVM chain ID.
pub const POLYGON_ZKEVM: ChainId = 1101;

/// Gnosis Chain chain ID.
pub const GNOSIS: ChainId = 100;

/// Gnosis Chiado testnet chain ID.
pub const GNOSIS_CHIADO_TESTNET: ChainId = 10200;

/// Arbitrum One chain ID.
pub const ARBITRUM_ONE: ChainId = 42161;

/// Arbitrum Nova chain ID.
pub const ARBITRUM_NOVA: ChainId = 42170;

/// Arbitrum Sepolia testnet chain ID.
pub const ARBITRUM_SEPOLIA: ChainId = 421_614;

/// Avalanche C-Chain chain ID.
pub const AVALANCHE_C_CHAIN: ChainId = 43114;

/// Avalanche Fuji testnet chain ID.
pub const AVALANCHE_FUJI_TESTNET: ChainId = 43113;

/// Base chain ID.
pub const BASE: ChainId = 8453;

/// Base Sepolia testnet chain ID.
pub const BASE_SEPOLIA_TESTNET: ChainId = 84532;

/// Celo chain ID.
pub const CELO: ChainId = 42220;

/// Celo Alfajores testnet chain ID.
pub const CELO_ALFAJORES_TESTNET: ChainId = 44787;

/// Fantom Opera chain ID.
pub const FANTOM_OPERA: ChainId = 250;

/// Moonbeam chain ID.
pub const MOONBEAM: ChainId = 1284;

/// Moonriver chain ID.
pub const MOONRIVER: ChainId = 1285;

/// zkSync Era chain ID.
pub const ZKSYNC_MAINNET: ChainId = 324;

/// Blast chain ID.
pub const BLAST: ChainId = 81457;

/// Fraxtal chain ID.
pub const FRAXTAL: ChainId = 252;

/// Energy Web Chain chain ID.
pub const ENERGY_WEB_CHAIN: ChainId = 246;

/// Energy Web Volta testnet chain ID.
pub const ENERGY_WEB_VOLTA_TESTNET: ChainId = 73799;

/// Polis chain ID.
pub const POLIS_MAINNET: ChainId = 333_999;

/// Boba Network chain ID.
pub const BOBA_NETWORK: ChainId = 288;

/// Gather devnet chain ID.
pub const GATHER_DEVNET_NETWORK: ChainId = 486_217_935;

/// Gather testnet chain ID.
pub const GATHER_TESTNET_NETWORK: ChainId = 356_256_156;

/// Gather mainnet chain ID.
pub const GATHER_MAINNET_NETWORK: ChainId = 192_837_465;

/// Metis Goerli testnet chain ID.
pub const METIS_GOERLI_TESTNET: ChainId = 599;

/// Metis Andromeda chain ID.
pub const METIS_ANDROMEDA_MAINNET: ChainId = 1088;

/// Fuse chain ID.
pub const FUSE_MAINNET: ChainId = 122;

/// Velas EVM chain ID.
pub const VELAS_EVM_MAINNET: ChainId = 106;

/// REI Network chain ID.
pub const REI_NETWORK: ChainId = 47805;

/// REI Chain testnet chain ID.
pub const REI_CHAIN_TESTNET: ChainId = 55556;

/// Meter chain ID.
pub const METER_MAINNET: ChainId = 82;

/// Meter testnet chain ID.
pub const METER_TESTNET: ChainId = 83;

/// Godwoken testnet v1 chain ID.
pub const GODWOKEN_TESTNET_V1: ChainId = 71401;

/// Godwoken chain ID.
pub const GODWOKEN_MAINNET: ChainId = 71402;

/// Venidium testnet chain ID.
pub const VENIDIUM_TESTNET: ChainId = 4918;

/// Venidium chain ID.
pub const VENIDIUM_MAINNET: ChainId = 4919;

/// Klaytn Baobab testnet chain ID.
pub const KLAYTN_TESTNET_BAOBAB: ChainId = 1001;

/// Klaytn Cypress chain ID.
pub const KLAYTN_MAINNET_CYPRESS: ChainId = 8217;

/// Acala chain ID.
pub const ACALA_NETWORK: ChainId = 787;

/// Karura testnet chain ID.
pub const KARURA_NETWORK_TESTNET: ChainId = 596;

/// Astar chain ID.
pub const ASTAR: ChainId = 592;

/// Shiden chain ID.
pub const SHIDEN: ChainId = 336;

/// Evmos chain ID.
pub const EVMOS: ChainId = 9001;

/// Evmos testnet chain ID.
pub const EVMOS_TESTNET: ChainId = 9000;

/// KCC chain ID.
pub const KCC_MAINNET: ChainId = 321;

/// KCC testnet chain ID.
pub const KCC_TESTNET: ChainId = 322;

/// Crossbell chain ID.
pub const CROSSBELL: ChainId = 3737;

/// Ethereum Classic chain ID.
pub const ETHEREUM_CLASSIC: ChainId = 61;

/// Mordor testnet chain ID.
pub const MORDOR_TESTNET: ChainId = 63;

/// Scroll Sepolia testnet chain ID.
pub const SCROLL_SEPOLIA_TESTNET: ChainId = 534_351;

/// Scroll chain ID.
pub const SCROLL: ChainId = 534_352;

/// Mantle chain ID.
pub const MANTLE: ChainId = 5000;

/// Mantle testnet chain ID.
pub const MANTLE_TESTNET: ChainId = 5001;

/// Mantle Sepolia testnet chain ID.
pub const MANTLE_SEPOLIA_TESTNET: ChainId = 5003;

/// Japan Open Chain chain ID.
pub const JAPAN_OPEN_CHAIN_MAINNET: ChainId = 81;

/// Japan Open Chain testnet chain ID.
pub const JAPAN_OPEN_CHAIN_TESTNET: ChainId = 10081;

/// ZetaChain Athens 3 testnet chain ID.
pub const ZETACHAIN_ATHENS_3_TESTNET: ChainId = 7001;

/// Rootstock chain ID.
pub const ROOTSTOCK_MAINNET: ChainId = 30;

/// Rootstock testnet chain ID.
pub const ROOTSTOCK_TESTNET: ChainId = 31;

/// Linea chain ID.
pub const LINEA: ChainId = 59144;

/// Linea Goerli testnet chain ID.
pub const LINEA_TESTNET: ChainId = 59140;

/// Neon EVM chain ID.
pub const NEON_EVM_MAINNET: ChainId = 245_022_934;

/// Neon EVM devnet chain ID.
pub const NEON_EVM_DEVNET: ChainId = 245_022_926;

/// Oasis Sapphire chain ID.
pub const OASIS_SAPPHIRE: ChainId = 23294;

/// Oasis Sapphire testnet chain ID.
pub const OASIS_SAPPHIRE_TESTNET: ChainId = 23295;

/// Cascadia testnet chain ID.
pub const CASCADIA_TESTNET: ChainId = 6102;

/// Tenet chain ID.
pub const TENET: ChainId = 1559;

/// Tenet testnet chain ID.
pub const TENET_TESTNET: ChainId = 155;

/// Cronos chain ID.
pub const CRONOS_MAINNET: ChainId = 25;

/// Cronos testnet chain ID.
pub const CRONOS_TESTNET: ChainId = 338;

/// ThunderCore chain ID.
pub const THUNDERCORE_MAINNET: ChainId = 108;

/// ThunderCore testnet chain ID.
pub const THUNDERCORE_TESTNET: ChainId = 18;

/// Public Goods Network chain ID.
pub const PGN_PUBLIC_GOODS_NETWORK: ChainId = 424;

/// Public Goods Network Sepolia chain ID.
pub const SEPOLIA_PGN_PUBLIC_GOODS_NETWORK: ChainId = 58008;

/// Arthera chain ID.
pub const ARTHERA_MAINNET: ChainId = 10242;

/// Arthera testnet chain ID.
pub const ARTHERA_TESTNET: ChainId = 10243;

/// Manta Pacific chain ID.
pub const MANTA_PACIFIC_MAINNET: ChainId = 169;

/// Kroma chain ID.
pub const KROMA: ChainId = 255;

/// Kroma Sepolia chain ID.
pub const KROMA_SEPOLIA: ChainId = 2358;

/// Zora chain ID.
pub const ZORA: ChainId = 7_777_777;

/// Zora Sepolia testnet chain ID.
pub const ZORA_SEPOLIA_TESTNET: ChainId = 999_999_999;

/// HAQQ Network chain ID.
pub const HAQQ_NETWORK: ChainId = 11235;

/// HAQQ testedge2 chain ID.
pub const HAQQ_CHAIN_TESTNET: ChainId = 54211;

/// Mode chain ID.
pub const MODE: ChainId = 34443;

/// Mode Sepolia testnet chain ID.
pub const MODE_TESTNET: ChainId = 919;

/// Unreal testnet chain ID.
pub const UNREAL_TESTNET: ChainId = 18233;

/// Taiko Katla chain ID.
pub const TAIKO_KATLA_L2: ChainId = 167_008;

/// Sei devnet chain ID.
pub const SEI_DEVNET: ChainId = 713_715;

/// Lisk Sepolia testnet chain ID.
pub const LISK_SEPOLIA_TESTNET: ChainId = 4202;

/// Merlin chain ID.
pub const MERLIN_MAINNET: ChainId = 4200;

/// Catalog of networks referenced by the explorer endpoint tables.
pub static NETWORKS: &[NetworkInfo] = &[
    NetworkInfo::new(MAINNET, "MAINNET"),
    NetworkInfo::new(SEPOLIA, "SEPOLIA"),
    NetworkInfo::new(HOLESKY, "HOLESKY"),
    NetworkInfo::new(OPTIMISM, "OPTIMISM"),
    NetworkInfo::new(OP_SEPOLIA_TESTNET, "OP_SEPOLIA_TESTNET"),
    NetworkInfo::new(BNB_SMART_CHAIN_MAINNET, "BNB_SMART_CHAIN_MAINNET"),
    NetworkInfo::new(BNB_SMART_CHAIN_TESTNET, "BNB_SMART_CHAIN_TESTNET"),
    NetworkInfo::new(POLYGON, "POLYGON"),
    NetworkInfo::new(POLYGON_AMOY, "POLYGON_AMOY"),
    NetworkInfo::new(POLYGON_ZKEVM, "POLYGON_ZKEVM"),
    NetworkInfo::new(GNOSIS, "GNOSIS"),
    NetworkInfo::new(GNOSIS_CHIADO_TESTNET, "GNOSIS_CHIADO_TESTNET"),
    NetworkInfo::new(ARBITRUM_ONE, "ARBITRUM_ONE"),
    NetworkInfo::new(ARBITRUM_NOVA, "ARBITRUM_NOVA"),
    NetworkInfo::new(ARBITRUM_SEPOLIA, "ARBITRUM_SEPOLIA"),
    NetworkInfo::new(AVALANCHE_C_CHAIN, "AVALANCHE_C_CHAIN"),
    NetworkInfo::new(AVALANCHE_FUJI_TESTNET, "AVALANCHE_FUJI_TESTNET"),
    NetworkInfo::new(BASE, "BASE"),
    NetworkInfo::new(BASE_SEPOLIA_TESTNET, "BASE_SEPOLIA_TESTNET"),
    NetworkInfo::new(CELO, "CELO"),
    NetworkInfo::new(CELO_ALFAJORES_TESTNET, "CELO_ALFAJORES_TESTNET"),
    NetworkInfo::new(FANTOM_OPERA, "FANTOM_OPERA"),
    NetworkInfo::new(MOONBEAM, "MOONBEAM"),
    NetworkInfo::new(MOONRIVER, "MOONRIVER"),
    NetworkInfo::new(ZKSYNC_MAINNET, "ZKSYNC_MAINNET"),
    NetworkInfo::new(BLAST, "BLAST"),
    NetworkInfo::new(FRAXTAL, "FRAXTAL"),
    NetworkInfo::new(ENERGY_WEB_CHAIN, "ENERGY_WEB_CHAIN"),
    NetworkInfo::new(ENERGY_WEB_VOLTA_TESTNET, "ENERGY_WEB_VOLTA_TESTNET"),
    NetworkInfo::new(POLIS_MAINNET, "POLIS_MAINNET"),
    NetworkInfo::new(BOBA_NETWORK, "BOBA_NETWORK"),
    NetworkInfo::new(GATHER_DEVNET_NETWORK, "GATHER_DEVNET_NETWORK"),
    NetworkInfo::new(GATHER_TESTNET_NETWORK, "GATHER_TESTNET_NETWORK"),
    NetworkInfo::new(GATHER_MAINNET_NETWORK, "GATHER_MAINNET_NETWORK"),
    NetworkInfo::new(METIS_GOERLI_TESTNET, "METIS_GOERLI_TESTNET"),
    NetworkInfo::new(METIS_ANDROMEDA_MAINNET, "METIS_ANDROMEDA_MAINNET"),
    NetworkInfo::new(FUSE_MAINNET, "FUSE_MAINNET"),
    NetworkInfo::new(VELAS_EVM_MAINNET, "VELAS_EVM_MAINNET"),
    NetworkInfo::new(REI_NETWORK, "REI_NETWORK"),
    NetworkInfo::new(REI_CHAIN_TESTNET, "REI_CHAIN_TESTNET"),
    NetworkInfo::new(METER_MAINNET, "METER_MAINNET"),
    NetworkInfo::new(METER_TESTNET, "METER_TESTNET"),
    NetworkInfo::new(GODWOKEN_TESTNET_V1, "GODWOKEN_TESTNET_V1"),
    NetworkInfo::new(GODWOKEN_MAINNET, "GODWOKEN_MAINNET"),
    NetworkInfo::new(VENIDIUM_TESTNET, "VENIDIUM_TESTNET"),
    NetworkInfo::new(VENIDIUM_MAINNET, "VENIDIUM_MAINNET"),
    NetworkInfo::new(KLAYTN_TESTNET_BAOBAB, "KLAYTN_TESTNET_BAOBAB"),
    NetworkInfo::new(KLAYTN_MAINNET_CYPRESS, "KLAYTN_MAINNET_CYPRESS"),
    NetworkInfo::new(ACALA_NETWORK, "ACALA_NETWORK"),
    NetworkInfo::new(KARURA_NETWORK_TESTNET, "KARURA_NETWORK_TESTNET"),
    NetworkInfo::new(ASTAR, "ASTAR"),
    NetworkInfo::new(SHIDEN, "SHIDEN"),
    NetworkInfo::new(EVMOS, "EVMOS"),
    NetworkInfo::new(EVMOS_TESTNET, "EVMOS_TESTNET"),
    NetworkInfo::new(KCC_MAINNET, "KCC_MAINNET"),
    NetworkInfo::new(KCC_TESTNET, "KCC_TESTNET"),
    NetworkInfo::new(CROSSBELL, "CROSSBELL"),
    NetworkInfo::new(ETHEREUM_CLASSIC, "ETHEREUM_CLASSIC"),
    NetworkInfo::new(MORDOR_TESTNET, "MORDOR_TESTNET"),
    NetworkInfo::new(SCROLL_SEPOLIA_TESTNET, "SCROLL_SEPOLIA_TESTNET"),
    NetworkInfo::new(SCROLL, "SCROLL"),
    NetworkInfo::new(MANTLE, "MANTLE"),
    NetworkInfo::new(MANTLE_TESTNET, "MANTLE_TESTNET"),
    NetworkInfo::new(MANTLE_SEPOLIA_TESTNET, "MANTLE_SEPOLIA_TESTNET"),
    NetworkInfo::new(JAPAN_OPEN_CHAIN_MAINNET, "JAPAN_OPEN_CHAIN_MAINNET"),
    NetworkInfo::new(JAPAN_OPEN_CHAIN_TESTNET, "JAPAN_OPEN_CHAIN_TESTNET"),
    NetworkInfo::new(ZETACHAIN_ATHENS_3_TESTNET, "ZETACHAIN_ATHENS_3_TESTNET"),
    NetworkInfo::new(ROOTSTOCK_MAINNET, "ROOTSTOCK_MAINNET"),
    NetworkInfo::new(ROOTSTOCK_TESTNET, "ROOTSTOCK_TESTNET"),
    NetworkInfo::new(LINEA, "LINEA"),
    NetworkInfo::new(LINEA_TESTNET, "LINEA_TESTNET"),
    NetworkInfo::new(NEON_EVM_MAINNET, "NEON_EVM_MAINNET"),
    NetworkInfo::new(NEON_EVM_DEVNET, "NEON_EVM_DEVNET"),
    NetworkInfo::new(OASIS_SAPPHIRE, "OASIS_SAPPHIRE"),
    NetworkInfo::new(OASIS_SAPPHIRE_TESTNET, "OASIS_SAPPHIRE_TESTNET"),
    NetworkInfo::new(CASCADIA_TESTNET, "CASCADIA_TESTNET"),
    NetworkInfo::new(TENET, "TENET"),
    NetworkInfo::new(TENET_TESTNET, "TENET_TESTNET"),
    NetworkInfo::new(CRONOS_MAINNET, "CRONOS_MAINNET"),
    NetworkInfo::new(CRONOS_TESTNET, "CRONOS_TESTNET"),
    NetworkInfo::new(THUNDERCORE_MAINNET, "THUNDERCORE_MAINNET"),
    NetworkInfo::new(THUNDERCORE_TESTNET, "THUNDERCORE_TESTNET"),
    NetworkInfo::new(PGN_PUBLIC_GOODS_NETWORK, "PGN_PUBLIC_GOODS_NETWORK"),
    NetworkInfo::new(SEPOLIA_PGN_PUBLIC_GOODS_NETWORK, "SEPOLIA_PGN_PUBLIC_GOODS_NETWORK"),
    NetworkInfo::new(ARTHERA_MAINNET, "ARTHERA_MAINNET"),
    NetworkInfo::new(ARTHERA_TESTNET, "ARTHERA_TESTNET"),
    NetworkInfo::new(MANTA_PACIFIC_MAINNET, "MANTA_PACIFIC_MAINNET"),
    NetworkInfo::new(KROMA, "KROMA"),
    NetworkInfo::new(KROMA_SEPOLIA, "KROMA_SEPOLIA"),
    NetworkInfo::new(ZORA, "ZORA"),
    NetworkInfo::new(ZORA_SEPOLIA_TESTNET, "ZORA_SEPOLIA_TESTNET"),
    NetworkInfo::new(HAQQ_NETWORK, "HAQQ_NETWORK"),
    NetworkInfo::new(HAQQ_CHAIN_TESTNET, "HAQQ_CHAIN_TESTNET"),
    NetworkInfo::new(MODE, "MODE"),
    NetworkInfo::new(MODE_TESTNET, "MODE_TESTNET"),
    NetworkInfo::new(UNREAL_TESTNET, "UNREAL_TESTNET"),
    NetworkInfo::new(TAIKO_KATLA_L2, "TAIKO_KATLA_L2"),
    NetworkInfo::new(SEI_DEVNET, "SEI_DEVNET"),
    NetworkInfo::new(LISK_SEPOLIA_TESTNET, "LISK_SEPOLIA_TESTNET"),
    NetworkInfo::new(MERLIN_MAINNET, "MERLIN_MAINNET"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_chain_ids_and_names() {
        let ids: HashSet<_> = NETWORKS.iter().map(|n| n.chain_id).collect();
        let names: HashSet<_> = NETWORKS.iter().map(|n| n.name).collect();
        assert_eq!(ids.len(), NETWORKS.len());
        assert_eq!(names.len(), NETWORKS.len());
    }

    #[test]
    fn known_network_reports_catalog_name() {
        let network = Network::new(GNOSIS);
        assert!(network.is_known());
        assert_eq!(network.name(), "GNOSIS");
        assert_eq!(network.to_string(), "GNOSIS (100)");
    }

    #[test]
    fn unknown_network_is_still_a_network() {
        let network = Network::new(987_654_321);
        assert!(!network.is_known());
        assert_eq!(network.name(), UNKNOWN_NETWORK_NAME);
    }

    #[test]
    fn parses_caip2_chain_id_and_name() {
        assert_eq!("eip155:137".parse::<Network>().unwrap(), Network::new(POLYGON));
        assert_eq!("8453".parse::<Network>().unwrap(), Network::new(BASE));
        assert_eq!("gnosis".parse::<Network>().unwrap(), Network::new(GNOSIS));
        assert!("solana:mainnet".parse::<Network>().is_err());
        assert!("not-a-chain".parse::<Network>().is_err());
    }

    #[test]
    fn caip2_helpers_are_inverse() {
        assert_eq!(caip2(MAINNET), "eip155:1");
        assert_eq!(parse_caip2("eip155:1"), Some(MAINNET));
        assert_eq!(parse_caip2("eip155:"), None);
        assert_eq!(parse_caip2("cosmos:1"), None);
    }

    #[test]
    fn long_chain_ids_round_trip_through_caip2() {
        assert_eq!(caip2(SEPOLIA), "eip155:11155111");
        assert_eq!(
            "eip155:999999999".parse::<Network>().unwrap(),
            Network::new(ZORA_SEPOLIA_TESTNET)
        );
        assert_eq!("245022934".parse::<Network>().unwrap().name(), "NEON_EVM_MAINNET");
        assert_eq!(NETWORKS.last().map(|n| n.chain_id), Some(MERLIN_MAINNET));
    }

    #[test]
    fn serializes_as_caip2() {
        let json = serde_json::to_string(&Network::new(GNOSIS)).unwrap();
        assert_eq!(json, "\"eip155:100\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Network::new(GNOSIS));
    }
}
