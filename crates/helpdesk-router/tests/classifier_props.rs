// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the keyword classifier.

use helpdesk_core::Intent;
use helpdesk_router::{DEFAULT_KEYWORDS, IntentClassifier, QueryRouter};
use proptest::prelude::*;

const BILLING: &[&str] = &["refund", "invoice", "billing", "payment", "price", "charge"];

proptest! {
    #[test]
    fn confidence_is_always_a_probability(message in any::<String>()) {
        let result = IntentClassifier::new().classify(&message);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!(result.intent.is_routable());
    }

    /// Digits, spaces and the letters x/z/q never form a keyword.
    #[test]
    fn keywordless_messages_get_default_intent(message in "[0-9xzq .,!?]{0,64}") {
        let result = IntentClassifier::new().classify(&message);
        prop_assert_eq!(result.intent, Intent::GeneralFaq);
        prop_assert_eq!(result.confidence, 0.0);
    }

    /// Appending text can only add substring hits, never remove them.
    #[test]
    fn confidence_is_monotonic_in_added_text(
        prefix in "[ -~]{0,48}",
        suffix in "[ -~]{0,48}",
    ) {
        let c = IntentClassifier::new();
        let before = c.classify(&prefix);
        let after = c.classify(&format!("{prefix}{suffix}"));
        prop_assert!(after.hits >= before.hits);
        prop_assert!(after.confidence >= before.confidence);
    }

    #[test]
    fn three_billing_keywords_saturate(
        keywords in proptest::sample::subsequence(BILLING.to_vec(), 3..=BILLING.len())
    ) {
        let message = keywords.join(" ");
        let result = IntentClassifier::new().classify(&message);
        prop_assert_eq!(result.intent, Intent::Billing);
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn router_agrees_with_classifier(message in "[ -~]{0,80}") {
        let router = QueryRouter::new();
        let routed = router.route(&message);
        let classified = router.classifier().classify(&message);
        prop_assert_eq!(routed.intent, classified.intent);
        prop_assert_eq!(routed.confidence, classified.confidence);
        prop_assert_eq!(routed.user_message, message);
    }
}

#[test]
fn every_single_keyword_routes_to_its_intent() {
    let c = IntentClassifier::new();
    for (intent, keywords) in DEFAULT_KEYWORDS {
        for keyword in *keywords {
            let result = c.classify(keyword);
            assert_eq!(result.intent, *intent, "{keyword} should route to {intent}");
            assert!(result.confidence > 0.0);
        }
    }
}
