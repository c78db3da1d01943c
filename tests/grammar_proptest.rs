//! Property-based tests for splitting, serialization and query encoding.
//!
//! Inputs are generated from the URI grammar and checked to survive a
//! serialize/parse cycle without losing or changing any component.

use proptest::prelude::*;

use uri_tools::{Component, QueryNode, Uri, split, validate_scheme};

/// Strategies for generating URI components.
mod strategies {
    use super::*;

    /// Scheme grammar: a letter, then letters, digits, `+`, `.` or `-`
    pub fn scheme() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9+.-]{0,10}"
    }

    /// Registered names made of dotted labels
    pub fn host() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9]{1,10}", 1..=4).prop_map(|labels| labels.join("."))
    }

    /// User info text, including characters that need encoding
    pub fn user_info() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ._~!$%+:@&=-]{1,12}"
    }

    /// Absolute path of non-empty segments
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec("[^/]{1,10}", 0..=4)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    /// Query value: a scalar, or a non-empty one-level node
    #[derive(Debug, Clone)]
    pub enum Entry {
        Scalar(String),
        Node(Vec<(String, String)>),
    }

    pub fn entry() -> impl Strategy<Value = Entry> {
        prop_oneof![
            "[a-z0-9 ]{0,6}".prop_map(Entry::Scalar),
            prop::collection::vec(("[a-z]{1,6}", "[a-z0-9 ]{0,6}"), 1..=3).prop_map(Entry::Node),
        ]
    }

    pub fn query() -> impl Strategy<Value = QueryNode> {
        prop::collection::vec(("[a-z]{1,6}", entry()), 0..=4).prop_map(|entries| {
            let mut node = QueryNode::new();
            for (key, entry) in entries {
                match entry {
                    Entry::Scalar(value) => node.set(key, value),
                    Entry::Node(children) => {
                        node.set(key, children.into_iter().collect::<QueryNode>());
                    }
                }
            }
            node
        })
    }

    pub fn fragment() -> impl Strategy<Value = String> {
        "\\PC{0,12}"
    }
}

use strategies::*;

// =============================================================================
// Scheme grammar
// =============================================================================

mod scheme_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_schemes_accepted(s in scheme()) {
            prop_assert!(validate_scheme(&s).is_ok());
        }

        #[test]
        fn digit_first_schemes_rejected(s in "[0-9][a-z0-9]{0,8}") {
            prop_assert!(validate_scheme(&s).is_err());
        }

        #[test]
        fn schemes_with_spaces_rejected(a in "[a-z]{1,5}", b in "[a-z]{0,5}") {
            let s = format!("{a} {b}");
            prop_assert!(validate_scheme(&s).is_err());
        }
    }
}

// =============================================================================
// Splitter
// =============================================================================

mod splitter_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn split_never_panics(s in any::<String>()) {
            let _ = split(&s);
        }

        #[test]
        fn recombined_parts_split_identically(s in "[a-dhpst0-9:/?#@.%+\\[\\]-]{0,32}") {
            // `//a:b:` splits but its recombination `//a:b` reads `b` as a port
            if let Ok(parts) = split(&s) {
                if let Ok(again) = split(&parts.to_string()) {
                    prop_assert_eq!(again, parts);
                }
            }
        }

        #[test]
        fn any_port_round_trips(port in any::<u16>(), h in host()) {
            let parts = split(&format!("http://{h}:{port}/")).unwrap();
            prop_assert_eq!(parts.port, Some(port));
        }

        #[test]
        fn ports_above_range_rejected(port in 65_536u32..1_000_000, h in host()) {
            let input = format!("http://{h}:{port}");
            prop_assert!(split(&input).is_err());
        }
    }
}

// =============================================================================
// Uri serialization
// =============================================================================

mod uri_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn built_uri_round_trips(
            scheme in scheme(),
            user in prop::option::of(user_info()),
            pass in user_info(),
            h in host(),
            port in prop::option::of(any::<u16>()),
            path in prop::option::of(path()),
            query in query(),
            fragment in prop::option::of(fragment()),
        ) {
            let mut uri = Uri::new();
            uri.set_scheme(Some(&scheme)).unwrap();
            // a password is only written alongside a user
            let with_pass = user.is_some();
            uri.set_user(user.as_deref());
            if with_pass {
                uri.set_pass(Some(&pass));
            }
            uri.set_host(Some(&h));
            uri.set_port(port);
            uri.set_path(path.as_deref());
            uri.replace_query(query);
            uri.set_fragment(fragment.as_deref());

            let reparsed = Uri::parse(&uri.to_string()).unwrap();
            prop_assert_eq!(reparsed, uri);
        }

        #[test]
        fn display_is_stable(
            scheme in scheme(),
            h in host(),
            path in path(),
            query in query(),
        ) {
            let mut uri = Uri::new();
            uri.set_scheme(Some(&scheme)).unwrap();
            uri.set_host(Some(&h));
            uri.set_path(Some(&path));
            uri.replace_query(query);

            let first = uri.to_string();
            let second = Uri::parse(&first).unwrap().to_string();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn dynamic_get_matches_set(h in host(), fragment in fragment()) {
            let mut uri = Uri::new();
            uri.set(Component::Host, Some(&h)).unwrap();
            uri.set(Component::Fragment, Some(&fragment)).unwrap();
            prop_assert_eq!(uri.get(Component::Host), Some(h));
            prop_assert_eq!(uri.get(Component::Fragment), Some(fragment));
        }

        #[test]
        fn port_assignment_never_fails(text in "\\PC{0,8}") {
            let mut uri = Uri::parse("http://h").unwrap();
            prop_assert!(uri.set(Component::Port, Some(&text)).is_ok());
            prop_assert!(uri.port().is_some());
        }
    }
}

// =============================================================================
// Query encoding
// =============================================================================

mod query_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn encoded_query_parses_back(node in query()) {
            let parsed = QueryNode::parse(&node.encode());
            prop_assert_eq!(parsed, node);
        }

        #[test]
        fn encoding_never_starts_or_ends_with_separator(node in query()) {
            let encoded = node.encode();
            prop_assert!(!encoded.starts_with('&'));
            prop_assert!(!encoded.ends_with('&'));
        }

        #[test]
        fn appended_indices_are_sequential(values in prop::collection::vec("[a-z]{1,4}", 1..6)) {
            let input = values
                .iter()
                .map(|v| format!("list[]={v}"))
                .collect::<Vec<_>>()
                .join("&");
            let node = QueryNode::parse(&input);
            let list = node.get("list").and_then(|v| v.as_node()).unwrap();
            prop_assert_eq!(list.len(), values.len());
            for (i, value) in values.iter().enumerate() {
                let key = i.to_string();
                prop_assert_eq!(list.get(&key).and_then(|v| v.as_str()), Some(value.as_str()));
            }
        }
    }
}
