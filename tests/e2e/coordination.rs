//! End-to-end tests for the propose → collect → relay → execute pipeline

use alloy::primitives::{address, U256};
use url::Url;

use crate::common::TestHarness;
use crate::skip_if_no_rpc;
use safe_quorum::{
    Coordinator, Error, ProposalBuilder, RelayClient, SignatureCollector,
};

const ONE_ETH: u128 = 1_000_000_000_000_000_000;

/// 2-of-3 scenario: two owners sign, execution succeeds, and balances move
/// by exactly the transferred amount (the relayer pays the gas, not the Safe)
#[tokio::test(flavor = "multi_thread")]
async fn test_two_of_three_transfer() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployed = harness.deploy_safe(3, 2, U256::from(5001)).await;

    let fund_amount = U256::from(10 * ONE_ETH);
    harness.mint_eth(deployed.address, fund_amount).await;

    let recipient = address!("0x4444444444444444444444444444444444444444");
    let recipient_before = harness.get_balance(recipient).await;
    let transfer_amount = U256::from(ONE_ETH);

    let safe = harness.safe_client(deployed.address).await;
    let coordinator = Coordinator::new(safe, harness.signers[..2].to_vec(), None).unwrap();

    let report = coordinator
        .transfer(ProposalBuilder::transfer(recipient, transfer_amount))
        .await
        .expect("pipeline should succeed with threshold-many signatures");

    assert!(report.execution.success);
    assert_eq!(report.signatures, 2);
    assert!(!report.relayed, "no relay was configured");
    assert!(
        report.warnings.is_empty(),
        "unexpected warnings: {:?}",
        report.warnings
    );

    assert_eq!(
        harness.get_balance(recipient).await,
        recipient_before + transfer_amount,
        "recipient should receive exactly the transferred amount"
    );
    assert_eq!(
        harness.get_balance(deployed.address).await,
        fund_amount - transfer_amount,
        "Safe should decrease by exactly the transferred amount"
    );
}

/// One signature against a threshold of two: execution is refused and no
/// balance moves
#[tokio::test(flavor = "multi_thread")]
async fn test_single_signature_is_refused() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployed = harness.deploy_safe(3, 2, U256::from(6001)).await;

    let fund_amount = U256::from(10 * ONE_ETH);
    harness.mint_eth(deployed.address, fund_amount).await;

    let recipient = address!("0x5555555555555555555555555555555555555555");
    let safe = harness.safe_client(deployed.address).await;
    let coordinator = Coordinator::new(safe, harness.signers[..1].to_vec(), None).unwrap();

    let err = coordinator
        .transfer(ProposalBuilder::transfer(recipient, U256::from(ONE_ETH)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Execution { .. }), "got {err:?}");
    assert_eq!(harness.get_balance(recipient).await, U256::ZERO);
    assert_eq!(harness.get_balance(deployed.address).await, fund_amount);
}

/// The Safe's own predicate rejects a sub-threshold aggregate and accepts a
/// complete one
#[tokio::test(flavor = "multi_thread")]
async fn test_validity_predicate_tracks_threshold() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployed = harness.deploy_safe(3, 2, U256::from(7001)).await;
    harness.mint_eth(deployed.address, U256::from(10 * ONE_ETH)).await;

    let safe = harness.safe_client(deployed.address).await;
    let recipient = address!("0x6666666666666666666666666666666666666666");

    let mut tx = ProposalBuilder::transfer(recipient, U256::from(ONE_ETH))
        .build(&safe)
        .await
        .unwrap();

    // one of two required signatures
    SignatureCollector::new(&harness.signers[..1], 1)
        .collect(&mut tx)
        .await
        .unwrap();
    let verdict = safe.check_signatures(&tx).await;
    assert!(!verdict.valid, "one signature must not satisfy threshold 2");
    assert!(verdict.reason.is_some());

    // second signature completes the set
    SignatureCollector::new(&harness.signers[..2], 2)
        .collect(&mut tx)
        .await
        .unwrap();
    let verdict = safe.check_signatures(&tx).await;
    assert!(verdict.valid, "threshold-many signatures must validate: {:?}", verdict.reason);
}

/// An unreachable transaction service degrades to a warning; signing and
/// direct execution still complete
#[tokio::test(flavor = "multi_thread")]
async fn test_relay_unreachable_degrades_to_warning() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployed = harness.deploy_safe(3, 2, U256::from(8001)).await;

    let fund_amount = U256::from(10 * ONE_ETH);
    harness.mint_eth(deployed.address, fund_amount).await;

    let recipient = address!("0x7777777777777777777777777777777777777777");
    let transfer_amount = U256::from(ONE_ETH);

    // nothing listens on the discard port
    let relay = RelayClient::new(Url::parse("http://127.0.0.1:9/").unwrap());

    let safe = harness.safe_client(deployed.address).await;
    let coordinator = Coordinator::new(safe, harness.signers[..2].to_vec(), Some(relay)).unwrap();

    let report = coordinator
        .transfer(ProposalBuilder::transfer(recipient, transfer_amount))
        .await
        .expect("relay failure must not block execution");

    assert!(report.execution.success);
    assert!(!report.relayed);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.to_string().contains("relay propose skipped")),
        "expected a relay warning, got {:?}",
        report.warnings
    );

    assert_eq!(
        harness.get_balance(recipient).await,
        transfer_amount,
        "execution must still transfer the funds"
    );
}
