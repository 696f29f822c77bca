//! Static endpoint tables for the supported explorers.
//!
//! The tables are plain data: one entry per chain, exact chain-id match, no
//! fallback. [`EndpointTable`] turns a table into a lookup map and lets
//! configuration add or replace entries.

use std::collections::HashMap;

use metaresolve::ChainId;
use metaresolve::networks::{
    ACALA_NETWORK, ARBITRUM_NOVA, ARBITRUM_ONE, ARBITRUM_SEPOLIA, ARTHERA_MAINNET, ARTHERA_TESTNET,
    ASTAR, AVALANCHE_C_CHAIN, AVALANCHE_FUJI_TESTNET, BASE, BASE_SEPOLIA_TESTNET, BLAST,
    BNB_SMART_CHAIN_MAINNET, BNB_SMART_CHAIN_TESTNET, BOBA_NETWORK, CASCADIA_TESTNET, CELO,
    CELO_ALFAJORES_TESTNET, CRONOS_MAINNET, CRONOS_TESTNET, CROSSBELL, ENERGY_WEB_CHAIN,
    ENERGY_WEB_VOLTA_TESTNET, ETHEREUM_CLASSIC, EVMOS, EVMOS_TESTNET, FANTOM_OPERA, FRAXTAL,
    FUSE_MAINNET, GATHER_DEVNET_NETWORK, GATHER_MAINNET_NETWORK, GATHER_TESTNET_NETWORK, GNOSIS,
    GNOSIS_CHIADO_TESTNET, GODWOKEN_MAINNET, GODWOKEN_TESTNET_V1, HAQQ_CHAIN_TESTNET, HAQQ_NETWORK,
    HOLESKY, JAPAN_OPEN_CHAIN_MAINNET, JAPAN_OPEN_CHAIN_TESTNET, KARURA_NETWORK_TESTNET,
    KCC_MAINNET, KCC_TESTNET, KLAYTN_MAINNET_CYPRESS, KLAYTN_TESTNET_BAOBAB, KROMA, KROMA_SEPOLIA,
    LINEA, LINEA_TESTNET, LISK_SEPOLIA_TESTNET, MAINNET, MANTA_PACIFIC_MAINNET, MANTLE,
    MANTLE_SEPOLIA_TESTNET, MANTLE_TESTNET, MERLIN_MAINNET, METER_MAINNET, METER_TESTNET,
    METIS_ANDROMEDA_MAINNET, METIS_GOERLI_TESTNET, MODE, MODE_TESTNET, MOONBEAM, MOONRIVER,
    MORDOR_TESTNET, NEON_EVM_DEVNET, NEON_EVM_MAINNET, OASIS_SAPPHIRE, OASIS_SAPPHIRE_TESTNET,
    OPTIMISM, OP_SEPOLIA_TESTNET, PGN_PUBLIC_GOODS_NETWORK, POLIS_MAINNET, POLYGON, POLYGON_AMOY,
    POLYGON_ZKEVM, REI_CHAIN_TESTNET, REI_NETWORK, ROOTSTOCK_MAINNET, ROOTSTOCK_TESTNET, SCROLL,
    SCROLL_SEPOLIA_TESTNET, SEI_DEVNET, SEPOLIA, SEPOLIA_PGN_PUBLIC_GOODS_NETWORK, SHIDEN,
    TAIKO_KATLA_L2, TENET, TENET_TESTNET, THUNDERCORE_MAINNET, THUNDERCORE_TESTNET, UNREAL_TESTNET,
    VELAS_EVM_MAINNET, VENIDIUM_MAINNET, VENIDIUM_TESTNET, ZETACHAIN_ATHENS_3_TESTNET,
    ZKSYNC_MAINNET, ZORA, ZORA_SEPOLIA_TESTNET,
};

/// An explorer API endpoint for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Chain served by the endpoint.
    pub chain_id: ChainId,
    /// Absolute API URL.
    pub url: &'static str,
}

impl Endpoint {
    /// Creates a new endpoint entry.
    #[must_use]
    pub const fn new(chain_id: ChainId, url: &'static str) -> Self {
        Self { chain_id, url }
    }
}

/// Etherscan's unified multichain API. The chain is selected per request
/// with the `chainid` query parameter.
pub const ETHERSCAN_V2_URL: &str = "https://api.etherscan.io/v2/api";

/// Chains served by the Etherscan v2 API (Etherscan, BscScan, PolygonScan, ...).
pub static ETHERSCAN_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(MAINNET, ETHERSCAN_V2_URL),
    Endpoint::new(SEPOLIA, ETHERSCAN_V2_URL),
    Endpoint::new(HOLESKY, ETHERSCAN_V2_URL),
    Endpoint::new(OPTIMISM, ETHERSCAN_V2_URL),
    Endpoint::new(OP_SEPOLIA_TESTNET, ETHERSCAN_V2_URL),
    Endpoint::new(BNB_SMART_CHAIN_MAINNET, ETHERSCAN_V2_URL),
    Endpoint::new(BNB_SMART_CHAIN_TESTNET, ETHERSCAN_V2_URL),
    Endpoint::new(POLYGON, ETHERSCAN_V2_URL),
    Endpoint::new(POLYGON_AMOY, ETHERSCAN_V2_URL),
    Endpoint::new(POLYGON_ZKEVM, ETHERSCAN_V2_URL),
    Endpoint::new(GNOSIS, ETHERSCAN_V2_URL),
    Endpoint::new(ARBITRUM_ONE, ETHERSCAN_V2_URL),
    Endpoint::new(ARBITRUM_NOVA, ETHERSCAN_V2_URL),
    Endpoint::new(ARBITRUM_SEPOLIA, ETHERSCAN_V2_URL),
    Endpoint::new(AVALANCHE_C_CHAIN, ETHERSCAN_V2_URL),
    Endpoint::new(AVALANCHE_FUJI_TESTNET, ETHERSCAN_V2_URL),
    Endpoint::new(BASE, ETHERSCAN_V2_URL),
    Endpoint::new(BASE_SEPOLIA_TESTNET, ETHERSCAN_V2_URL),
    Endpoint::new(CELO, ETHERSCAN_V2_URL),
    Endpoint::new(MOONBEAM, ETHERSCAN_V2_URL),
    Endpoint::new(MOONRIVER, ETHERSCAN_V2_URL),
    Endpoint::new(CRONOS_MAINNET, ETHERSCAN_V2_URL),
    Endpoint::new(LINEA, ETHERSCAN_V2_URL),
    Endpoint::new(SCROLL, ETHERSCAN_V2_URL),
    Endpoint::new(BLAST, ETHERSCAN_V2_URL),
    Endpoint::new(ZKSYNC_MAINNET, ETHERSCAN_V2_URL),
    Endpoint::new(MANTLE, ETHERSCAN_V2_URL),
];

/// Blockscout GraphQL endpoints.
pub static BLOCKSCOUT_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(GNOSIS, "https://gnosis.blockscout.com/api/v1/graphql"),
    Endpoint::new(ENERGY_WEB_CHAIN, "https://explorer.energyweb.org/graphiql"),
    Endpoint::new(ENERGY_WEB_VOLTA_TESTNET, "https://volta-explorer.energyweb.org/graphiql"),
    Endpoint::new(POLIS_MAINNET, "https://explorer.polis.tech/graphiql"),
    Endpoint::new(BOBA_NETWORK, "https://blockexplorer.boba.network/graphiql"),
    Endpoint::new(GATHER_DEVNET_NETWORK, "https://devnet-explorer.gather.network/graphiql"),
    Endpoint::new(GATHER_TESTNET_NETWORK, "https://testnet-explorer.gather.network/graphiql"),
    Endpoint::new(GATHER_MAINNET_NETWORK, "https://explorer.gather.network/graphiql"),
    Endpoint::new(METIS_GOERLI_TESTNET, "https://goerli.explorer.metisdevops.link/graphiql"),
    Endpoint::new(METIS_ANDROMEDA_MAINNET, "https://andromeda-explorer.metis.io/graphiql"),
    Endpoint::new(FUSE_MAINNET, "https://explorer.fuse.io/graphiql"),
    Endpoint::new(VELAS_EVM_MAINNET, "https://evmexplorer.velas.com/graphiql"),
    Endpoint::new(REI_NETWORK, "https://scan.rei.network/graphiql"),
    Endpoint::new(REI_CHAIN_TESTNET, "https://scan-test.rei.network/graphiql"),
    Endpoint::new(METER_MAINNET, "https://scan.meter.io/graphiql"),
    Endpoint::new(METER_TESTNET, "https://scan-warringstakes.meter.io/graphiql"),
    Endpoint::new(GODWOKEN_TESTNET_V1, "https://v1.betanet.gwscan.com/graphiql"),
    Endpoint::new(GODWOKEN_MAINNET, "https://v1.gwscan.com/graphiql"),
    Endpoint::new(VENIDIUM_TESTNET, "https://evm-testnet.venidiumexplorer.com/graphiql"),
    Endpoint::new(VENIDIUM_MAINNET, "https://evm.venidiumexplorer.com/graphiql"),
    Endpoint::new(KLAYTN_TESTNET_BAOBAB, "https://baobab.scope.klaytn.com/graphiql"),
    Endpoint::new(KLAYTN_MAINNET_CYPRESS, "https://scope.klaytn.com/graphiql"),
    Endpoint::new(ACALA_NETWORK, "https://blockscout.acala.network/graphiql"),
    Endpoint::new(KARURA_NETWORK_TESTNET, "https://blockscout.karura.network/graphiql"),
    Endpoint::new(ASTAR, "https://blockscout.com/astar/graphiql"),
    Endpoint::new(SHIDEN, "https://blockscout.com/shiden/graphiql"),
    Endpoint::new(EVMOS, "https://evm.evmos.org/graphiql"),
    Endpoint::new(EVMOS_TESTNET, "https://evm.evmos.dev/graphiql"),
    Endpoint::new(KCC_MAINNET, "https://scan.kcc.io/graphiql"),
    Endpoint::new(KCC_TESTNET, "https://scan-testnet.kcc.network/graphiql"),
    Endpoint::new(CROSSBELL, "https://scan.crossbell.io/graphiql"),
    Endpoint::new(ETHEREUM_CLASSIC, "https://blockscout.com/etc/mainnet/graphiql"),
    Endpoint::new(MORDOR_TESTNET, "https://blockscout.com/etc/mordor/graphiql"),
    Endpoint::new(SCROLL_SEPOLIA_TESTNET, "https://sepolia-blockscout.scroll.io/graphiql"),
    Endpoint::new(MANTLE, "https://explorer.mantle.xyz/graphiql"),
    Endpoint::new(MANTLE_TESTNET, "https://explorer.testnet.mantle.xyz/graphiql"),
    Endpoint::new(JAPAN_OPEN_CHAIN_MAINNET, "https://mainnet.japanopenchain.org/graphiql"),
    Endpoint::new(JAPAN_OPEN_CHAIN_TESTNET, "https://explorer.testnet.japanopenchain.org/graphiql"),
    Endpoint::new(ZETACHAIN_ATHENS_3_TESTNET, "https://zetachain-athens-3.blockscout.com/graphiql"),
    Endpoint::new(SCROLL, "https://blockscout.scroll.io/graphiql"),
    Endpoint::new(ROOTSTOCK_MAINNET, "https://rootstock.blockscout.com/graphiql"),
    Endpoint::new(ROOTSTOCK_TESTNET, "https://rootstock-testnet.blockscout.com/graphiql"),
    Endpoint::new(LINEA, "https://explorer.linea.build/graphiql"),
    Endpoint::new(LINEA_TESTNET, "https://explorer.goerli.linea.build/graphiql"),
    Endpoint::new(NEON_EVM_MAINNET, "https://neon.blockscout.com/graphiql"),
    Endpoint::new(NEON_EVM_DEVNET, "https://neon-devnet.blockscout.com/graphiql"),
    Endpoint::new(OASIS_SAPPHIRE, "https://explorer.sapphire.oasis.io/graphiql"),
    Endpoint::new(OASIS_SAPPHIRE_TESTNET, "https://testnet.explorer.sapphire.oasis.dev/graphiql"),
    Endpoint::new(CASCADIA_TESTNET, "https://explorer.cascadia.foundation/graphiql"),
    Endpoint::new(TENET, "https://tenetscan.io/graphiql"),
    Endpoint::new(TENET_TESTNET, "https://testnet.tenetscan.io/graphiql"),
    Endpoint::new(CRONOS_MAINNET, "https://cronos.org/explorer/graphiql"),
    Endpoint::new(CRONOS_TESTNET, "https://cronos.org/explorer/testnet3/graphiql"),
    Endpoint::new(THUNDERCORE_MAINNET, "https://explorer-mainnet.thundercore.com/graphiql"),
    Endpoint::new(THUNDERCORE_TESTNET, "https://explorer-testnet.thundercore.com/graphiql"),
    Endpoint::new(PGN_PUBLIC_GOODS_NETWORK, "https://explorer.publicgoods.network/graphiql"),
    Endpoint::new(SEPOLIA_PGN_PUBLIC_GOODS_NETWORK, "https://explorer.sepolia.publicgoods.network/graphiql"),
    Endpoint::new(ARTHERA_MAINNET, "https://explorer.arthera.net/graphiql"),
    Endpoint::new(ARTHERA_TESTNET, "https://explorer-test.arthera.net/graphiql"),
    Endpoint::new(MANTA_PACIFIC_MAINNET, "https://pacific-explorer.manta.network/graphiql"),
    Endpoint::new(KROMA, "https://blockscout.kroma.network/graphiql"),
    Endpoint::new(KROMA_SEPOLIA, "https://blockscout.sepolia.kroma.network/graphiql"),
    Endpoint::new(ZORA, "https://explorer.zora.energy/graphiql"),
    Endpoint::new(ZORA_SEPOLIA_TESTNET, "https://sepolia.explorer.zora.energy/graphiql"),
    Endpoint::new(HAQQ_NETWORK, "https://explorer.haqq.network/graphiql"),
    Endpoint::new(HAQQ_CHAIN_TESTNET, "https://explorer.testedge2.haqq.network/graphiql"),
    Endpoint::new(MODE, "https://explorer.mode.network/graphiql"),
    Endpoint::new(MODE_TESTNET, "https://sepolia.explorer.mode.network/graphiql"),
    Endpoint::new(MANTLE_SEPOLIA_TESTNET, "https://explorer.sepolia.mantle.xyz/graphiql"),
    Endpoint::new(OP_SEPOLIA_TESTNET, "https://optimism-sepolia.blockscout.com/graphiql"),
    Endpoint::new(UNREAL_TESTNET, "https://unreal.blockscout.com/graphiql"),
    Endpoint::new(TAIKO_KATLA_L2, "https://explorer.katla.taiko.xyz/graphiql"),
    Endpoint::new(SEI_DEVNET, "https://seitrace.com/graphiql"),
    Endpoint::new(LISK_SEPOLIA_TESTNET, "https://sepolia-blockscout.lisk.com/graphiql"),
    Endpoint::new(MERLIN_MAINNET, "https://scan-v1.merlinchain.io/graphiql"),
];

/// Chains with verified sources on `sourcify.dev`.
pub static SOURCIFY_CHAINS: &[ChainId] = &[
    MAINNET,
    SEPOLIA,
    HOLESKY,
    OPTIMISM,
    OP_SEPOLIA_TESTNET,
    BNB_SMART_CHAIN_MAINNET,
    BNB_SMART_CHAIN_TESTNET,
    POLYGON,
    POLYGON_AMOY,
    POLYGON_ZKEVM,
    GNOSIS,
    GNOSIS_CHIADO_TESTNET,
    ARBITRUM_ONE,
    ARBITRUM_NOVA,
    ARBITRUM_SEPOLIA,
    AVALANCHE_C_CHAIN,
    AVALANCHE_FUJI_TESTNET,
    BASE,
    BASE_SEPOLIA_TESTNET,
    CELO,
    CELO_ALFAJORES_TESTNET,
    FANTOM_OPERA,
    MOONBEAM,
    MOONRIVER,
    CRONOS_MAINNET,
    LINEA,
    SCROLL,
    SCROLL_SEPOLIA_TESTNET,
    MANTLE,
    ZKSYNC_MAINNET,
    ZORA,
    MODE,
    ROOTSTOCK_MAINNET,
    ROOTSTOCK_TESTNET,
    FUSE_MAINNET,
    METIS_ANDROMEDA_MAINNET,
    BLAST,
    FRAXTAL,
    HAQQ_NETWORK,
];

/// Chain id to endpoint URL lookup, seeded from a static table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointTable {
    urls: HashMap<ChainId, String>,
}

impl EndpointTable {
    /// Builds a table from static entries.
    #[must_use]
    pub fn from_static(entries: &[Endpoint]) -> Self {
        entries
            .iter()
            .map(|e| (e.chain_id, e.url.to_owned()))
            .collect()
    }

    /// The built-in Etherscan-family table.
    #[must_use]
    pub fn etherscan() -> Self {
        Self::from_static(ETHERSCAN_ENDPOINTS)
    }

    /// The built-in Blockscout table.
    #[must_use]
    pub fn blockscout() -> Self {
        Self::from_static(BLOCKSCOUT_ENDPOINTS)
    }

    /// Adds or replaces the endpoint for `chain_id`.
    pub fn insert(&mut self, chain_id: ChainId, url: impl Into<String>) -> Option<String> {
        self.urls.insert(chain_id, url.into())
    }

    /// Returns the endpoint URL for `chain_id`, if any.
    #[must_use]
    pub fn get(&self, chain_id: ChainId) -> Option<&str> {
        self.urls.get(&chain_id).map(String::as_str)
    }

    /// Returns `true` if `chain_id` has an endpoint.
    #[must_use]
    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.urls.contains_key(&chain_id)
    }

    /// Number of chains in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<(ChainId, String)> for EndpointTable {
    fn from_iter<I: IntoIterator<Item = (ChainId, String)>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}
