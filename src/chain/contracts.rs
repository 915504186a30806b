use ethers::prelude::abigen;

abigen!(
    Erc20Metadata,
    r#"[
        function decimals() external view returns (uint8)
    ]"#
);

abigen!(
    AggregatorV3,
    r#"[
        function latestRoundData() external view returns (uint80 roundId, int256 answer, uint256 startedAt, uint256 updatedAt, uint80 answeredInRound)
    ]"#
);

abigen!(
    JoePair,
    r#"[
        function token0() external view returns (address)
        function token1() external view returns (address)
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast)
    ]"#
);

abigen!(
    LbPair,
    r#"[
        function getTokenX() external view returns (address tokenX)
        function getTokenY() external view returns (address tokenY)
        function getSwapOut(uint128 amountIn, bool swapForY) external view returns (uint128 amountInLeft, uint128 amountOut, uint128 fee)
        function getSwapIn(uint128 amountOut, bool swapForY) external view returns (uint128 amountIn, uint128 amountOutLeft, uint128 fee)
    ]"#
);
