use proptest::prelude::*;

use stepup_client::{Endpoint, HttpBody, SecureToken};
use stepup_client::models::FeedbackFilter;

/// Tokens as issued by identity providers: base64url segments joined by dots
pub fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,40}(\\.[A-Za-z0-9_-]{1,40}){0,2}"
}

/// Identifiers and free text as they appear in bodies and query strings
pub fn field_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 áéíóúñ&=/?#+%-]{0,24}"
}

/// Feedback identifiers; never empty and free of dot segments
pub fn feedback_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 áéíóúñ&=/?#+%-]{1,24}"
}

pub fn body_strategy() -> impl Strategy<Value = HttpBody> {
    (field_value_strategy(), field_value_strategy()).prop_map(|(location, area)| {
        HttpBody::from([
            ("location".to_string(), location),
            ("area".to_string(), area),
        ])
    })
}

/// Every endpoint variant with an arbitrary token and payload
pub fn endpoint_strategy() -> impl Strategy<Value = Endpoint> {
    (token_strategy(), body_strategy(), feedback_id_strategy(), 0usize..12).prop_map(
        |(token, body, id, variant)| {
            let token = SecureToken::new(token);
            match variant {
                0 => Endpoint::Area(token),
                1 => Endpoint::Location(token),
                2 => Endpoint::LoggedInUser(token),
                3 => Endpoint::NewLocalUser(token, body),
                4 => Endpoint::UpdateLocalUser(token, body),
                5 => Endpoint::CompanyValues(token),
                6 => Endpoint::Contacts(token),
                7 => Endpoint::Feedback(token),
                8 => Endpoint::NewFeedback(token, body),
                9 => Endpoint::LikeFeedback(token, id),
                10 => Endpoint::FlagFeedback(token, id),
                _ => Endpoint::Rankings(token),
            }
        },
    )
}

pub fn feedback_filter_strategy() -> impl Strategy<Value = FeedbackFilter> {
    (
        field_value_strategy(),
        field_value_strategy(),
        field_value_strategy(),
        field_value_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<u32>(),
        1u32..100,
    )
        .prop_map(
            |(from, to, value, user, is_private, is_pinned, skip, limit)| FeedbackFilter {
                from,
                to,
                value,
                user,
                is_private,
                is_pinned,
                skip,
                limit,
            },
        )
}
