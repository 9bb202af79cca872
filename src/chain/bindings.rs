//! ABI bindings for the view functions the checks read.

alloy::sol! {
    interface IStrategy {
        function getProtectedTokens() external view returns (address[] memory);
        function governance() external view returns (address);
        function performanceFeeGovernance() external view returns (uint256);
        function performanceFeeStrategist() external view returns (uint256);
        function withdrawalFee() external view returns (uint256);
        function vToken() external view returns (address);
        function DECIMALS() external view returns (uint256);
        function ADDRESS_PROVIDER() external view returns (address);
        function LENDING_POOL() external view returns (address);
    }

    interface IERC20Metadata {
        function decimals() external view returns (uint8);
    }

    interface ILendingPoolAddressesProvider {
        function getLendingPool() external view returns (address);
    }
}
