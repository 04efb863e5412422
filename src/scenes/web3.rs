//! Web3 & blockchain: a transaction from the dApp to a confirmed block.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{
    above, rgb, stage, tool, Category, GroupBlueprint, NodeBlueprint, SceneBlueprint, SceneChoice,
    Shape, TRACE_COLOR,
};

const DAPP: [f32; 3] = [-2.4, 1.2, 0.0];
const WALLET: [f32; 3] = [0.0, 1.6, 0.0];
const CONTRACTS: [f32; 3] = [2.4, 1.2, 0.0];
const NETWORK: [f32; 3] = [1.4, -1.2, 0.0];
const MINING: [f32; 3] = [-1.4, -1.2, 0.0];
const CHAIN: [f32; 3] = [0.0, -0.1, -0.8];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(5.0)
        .leg("User Interaction", above(DAPP))
        .leg("Wallet Signing", above(WALLET))
        .leg("Smart Contract", above(CONTRACTS))
        .leg("Block Mining", above(NETWORK))
        .leg("Confirmation", above(MINING));

    // a short chain of blocks behind the stages
    let mut chain = GroupBlueprint::new("chain", CHAIN);
    for i in 0..5 {
        let x = (i as f32 - 2.0) * 0.55;
        chain = chain.with_node(NodeBlueprint::cube("", [x, 0.0, 0.0], [0.32; 3], rgb(0x8B5CF6)).with_glow(0.15));
    }

    SceneBlueprint::new(SceneChoice::Category(Category::Web3))
        .with_group(chain)
        .with_group(stage(
            "dapp",
            "Frontend DApp",
            DAPP,
            0x1E40AF,
            &[
                tool("React/Vue", Shape::Sphere, 0x61DAFB),
                tool("Web3.js", Shape::Cube, 0xF16822),
                tool("Ethers.js", Shape::Cube, 0x2535A0),
            ],
        ))
        .with_group(stage(
            "wallet",
            "Wallet Connection",
            WALLET,
            0x92400E,
            &[
                tool("MetaMask", Shape::Icosahedron, 0xE2761B),
                tool("WalletConnect", Shape::Sphere, 0x3B99FC),
                tool("Private Keys", Shape::Cube, 0xEAB308),
            ],
        ))
        .with_group(stage(
            "contracts",
            "Smart Contracts",
            CONTRACTS,
            0x6D28D9,
            &[
                tool("Solidity", Shape::Icosahedron, 0x363636),
                tool("OpenZeppelin", Shape::Cube, 0x4E5EE4),
                tool("Hardhat", Shape::Cube, 0xFFF100),
            ],
        ))
        .with_group(stage(
            "network",
            "Blockchain Network",
            NETWORK,
            0x047857,
            &[
                tool("Ethereum", Shape::Icosahedron, 0x627EEA),
                tool("Polygon", Shape::Icosahedron, 0x8247E5),
                tool("IPFS", Shape::Sphere, 0x65C2CB),
            ],
        ))
        .with_group(stage(
            "mining",
            "Transaction Mining",
            MINING,
            0xB45309,
            &[
                tool("Gas Fees", Shape::Cylinder, 0xF59E0B),
                tool("Block Confirmation", Shape::Cube, 0x10B981),
                tool("Explorer", Shape::Sphere, 0x21325B),
            ],
        ))
        .with_flow(flow, Category::Web3.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::spin("chain", Channel::RotationX, 0.2))
        .with_motion(IdleMotion::sine("contracts", Channel::RotationY, 0.06, 0.6))
        .with_motion(IdleMotion::sine("wallet", Channel::PositionY, 0.04, 0.8))
}
