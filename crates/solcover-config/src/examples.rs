// crates/solcover-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for the coverage configuration. Output is deterministic
//! and kept in sync with the schema and docs by the artifact tests.

/// Returns a canonical example `.solcover.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"istanbulReporter = ["html", "lcov"]
skipFiles = [
    "mocks/cDAINonMintableMock.sol",
    "mocks/GoodCompoundStakingTest.sol",
    "mocks/DaiEthPriceMockOracle.sol",
    "mocks/TwentyDecimalsTokenMock.sol",
    "mocks/EightDecimalsTokenMock.sol",
    "mocks/EthUSDMockOracle.sol",
    "mocks/cDAILowWorthMock.sol",
    "mocks/cEDTMock.sol",
    "mocks/cUSDCMock.sol",
    "mocks/OverMintTesterRegularStake.sol",
    "mocks/GoodFundManagerTest.sol",
    "mocks/cSDTMock.sol",
    "mocks/SixteenDecimalsTokenMock.sol",
    "mocks/GasPriceMockOracle.sol",
    "mocks/UsdcMock.sol",
    "mocks/DAIMock.sol",
    "mocks/BatUSDMockOracle.sol",
    "mocks/CompUsdMockOracle.sol",
    "mocks/OverMintTester.sol",
    "mocks/cDAIMock.sol",
    "mocks/cBATMock.sol",
    "utils/ReputationTestHelper.sol",
    "utils/BancorFormula.sol",
    "utils/DSMath.sol",
]

[providerOptions]
mnemonic = "glad notable bullet donkey fall dolphin simple size stone evil slogan dinner"
default_balance_ether = 1000000

[mocha]
# Select everything tagged @skip-on-coverage, then run the inverse set.
grep = "@skip-on-coverage"
invert = true
enableTimeouts = false
timeout = 3600000
"#,
    )
}
