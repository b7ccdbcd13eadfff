//! Integration tests for the sale-post price/availability state machine.

mod common;

use flocknet::NetworkError;

fn listing(net: &flocknet::Network) -> (flocknet::SharedAccount, flocknet::SharedPost) {
    let alice = net.sign_up("alice", "hunter2").unwrap();
    let post = net
        .publish_post(&alice, "Sale", "vintage synth", Some(1000.0), Some("Berlin"))
        .unwrap();
    (alice, post)
}

#[test]
fn sale_listing_describe_format() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    assert_eq!(
        post.read().describe(),
        "alice posted a product for sale:\nFor sale! vintage synth, price: 1000, pickup from: Berlin\n"
    );
}

#[test]
fn listing_without_price_or_location_is_rejected() {
    let net = common::network("t");
    let alice = net.sign_up("alice", "hunter2").unwrap();

    assert_eq!(
        net.publish_post(&alice, "Sale", "synth", None, Some("Berlin"))
            .unwrap_err(),
        NetworkError::IncompleteSaleListing
    );
    assert_eq!(
        net.publish_post(&alice, "Sale", "synth", Some(100.0), None)
            .unwrap_err(),
        NetworkError::IncompleteSaleListing
    );
    assert!(alice.read().posts.is_empty());
}

#[test]
fn discount_with_the_author_password_reprices() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    net.discount(&post, 50.0, "hunter2").unwrap();

    assert_eq!(post.read().price(), Some(500.0));
    assert!(net
        .event_lines()
        .contains(&"Discount on alice product! the new price is: 500".to_string()));
}

#[test]
fn discount_with_wrong_password_changes_nothing() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    assert_eq!(
        net.discount(&post, 50.0, "wrong").unwrap_err(),
        NetworkError::InvalidCredential
    );
    assert_eq!(post.read().price(), Some(1000.0));
}

#[test]
fn discount_requires_an_open_session() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);
    net.log_out("alice");

    assert_eq!(
        net.discount(&post, 50.0, "hunter2").unwrap_err(),
        NetworkError::NotAuthorized { action: "discount" }
    );
    assert_eq!(post.read().price(), Some(1000.0));

    net.log_in("alice", "hunter2");
    net.discount(&post, 50.0, "hunter2").unwrap();
    assert_eq!(post.read().price(), Some(500.0));
}

#[test]
fn discount_percent_is_not_bounded() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    // Over 100 percent drives the price negative; preserved as-is.
    net.discount(&post, 150.0, "hunter2").unwrap();
    assert_eq!(post.read().price(), Some(-500.0));
}

#[test]
fn negative_discount_raises_the_price() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    net.discount(&post, -10.0, "hunter2").unwrap();
    let price = post.read().price().unwrap();
    assert!((price - 1100.0).abs() < 1e-6);
}

#[test]
fn sold_flips_the_describe_line() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    net.mark_sold(&post, "hunter2").unwrap();

    assert_eq!(post.read().is_available(), Some(false));
    assert_eq!(
        post.read().describe(),
        "alice posted a product for sale:\nSold! vintage synth, price: 1000, pickup from: Berlin\n"
    );
    assert!(net
        .event_lines()
        .contains(&"alice's product is sold".to_string()));
}

#[test]
fn sold_is_idempotent_but_still_checks_authorization() {
    let net = common::network("t");
    let (_alice, post) = listing(&net);

    net.mark_sold(&post, "hunter2").unwrap();
    net.mark_sold(&post, "hunter2").unwrap();
    assert_eq!(post.read().is_available(), Some(false));

    // Re-selling with a bad password is still refused.
    assert_eq!(
        net.mark_sold(&post, "wrong").unwrap_err(),
        NetworkError::InvalidCredential
    );

    net.log_out("alice");
    assert_eq!(
        net.mark_sold(&post, "hunter2").unwrap_err(),
        NetworkError::NotAuthorized { action: "sold" }
    );
}

#[test]
fn sale_transitions_reject_other_post_kinds() {
    let net = common::network("t");
    let alice = net.sign_up("alice", "hunter2").unwrap();
    let post = net.publish_post(&alice, "Text", "hi", None, None).unwrap();

    assert_eq!(
        net.discount(&post, 10.0, "hunter2").unwrap_err(),
        NetworkError::NotSaleListing
    );
    assert_eq!(
        net.mark_sold(&post, "hunter2").unwrap_err(),
        NetworkError::NotSaleListing
    );
}

#[test]
fn engagement_works_on_sale_posts_too() {
    let net = common::network("t");
    let (alice, post) = listing(&net);
    let bob = net.sign_up("bob", "1234").unwrap();

    net.like(&post, &bob).unwrap();
    net.comment(&post, &bob, "still available?").unwrap();

    assert_eq!(post.read().likes, 1);
    assert_eq!(post.read().comments, 1);
    assert_eq!(
        alice.read().notifications,
        vec![
            "bob liked your post",
            "bob commented on your post: still available?"
        ]
    );
}
