use super::*;
use crate::transaction::{MoveCall, MoveTarget, PureArg};

const SEED_HEX: &str = "0202020202020202020202020202020202020202020202020202020202020202";

fn signer() -> SuiKeypair {
    SuiKeypair::from_hex(SEED_HEX).unwrap()
}

fn tx() -> Transaction {
    let target = MoveTarget::new("0x7".parse().unwrap(), "m", "f");
    Transaction::new().with_move_call(MoveCall::new(target, vec![PureArg::from("x")]))
}

#[tokio::test]
async fn records_submissions() {
    let record = TestLedgerClient::creating_nothing();
    let options = ResponseOptions::effects_and_events();
    record.sign_and_execute(&signer(), &tx(), options).await.unwrap();

    let submitted = record.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].signer, signer().address());
    assert_eq!(submitted[0].transaction, tx());
    assert_eq!(submitted[0].options, options);
}

#[tokio::test]
async fn reports_created_objects_in_order() {
    let first: ObjectId = "0xa".parse().unwrap();
    let second: ObjectId = "0xb".parse().unwrap();
    let record = TestLedgerClient::creating(vec![first, second]);
    let res = record
        .sign_and_execute(&signer(), &tx(), ResponseOptions::effects_and_events())
        .await
        .unwrap();
    assert_eq!(res.first_created_object_id(), Some(&first));
    assert_eq!(res.effects().unwrap().created().len(), 2);
}

#[tokio::test]
async fn effects_only_when_asked_for() {
    let id: ObjectId = "0xa".parse().unwrap();
    let record = TestLedgerClient::creating(vec![id]);
    let res = record
        .sign_and_execute(&signer(), &tx(), ResponseOptions::default())
        .await
        .unwrap();
    assert!(res.effects().is_none());
}

#[tokio::test]
async fn rejecting_client_fails_to_issue() {
    let record = TestLedgerClient::rejecting("node down");
    let err = record
        .sign_and_execute(&signer(), &tx(), ResponseOptions::effects_and_events())
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerClientError::FailedToIssueTx(_)));
    // still recorded; the attempt happened
    assert_eq!(record.submitted().len(), 1);
}

#[tokio::test]
async fn connector_shares_record_and_counts() {
    let connector = TestConnector::new(TestLedgerClient::creating_nothing());
    let url = Url::parse("http://localhost:9000").unwrap();
    let client = connector.connect(&url).unwrap();
    client
        .sign_and_execute(&signer(), &tx(), ResponseOptions::effects_and_events())
        .await
        .unwrap();
    assert_eq!(connector.connections(), 1);
    assert_eq!(connector.client().submitted().len(), 1);
}
