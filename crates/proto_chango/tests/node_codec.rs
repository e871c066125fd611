use proto_chango::{decode_node, encode_node, CodecError, Node};
use uuid::Uuid;

fn id(text: &str) -> Uuid {
    Uuid::parse_str(text).unwrap()
}

fn sample_tree() -> Node {
    Node::with_children(
        id("63966bf7d2bf4b65b997571d9d51398c"),
        vec![
            Node::with_id(id("1f616d205bec4b2e9ab96d4579411410")),
            Node::with_id(id("e65465bccf684efbb61c9a00b838a966")),
            Node::with_children(
                id("bfc7fc1c99d244ec98f5a5d040d2db91"),
                vec![Node::with_id(id("3d62e1bef81c476a9c508a5cd4cfcf44"))],
            ),
        ],
    )
}

#[test]
fn encode_node_matches_reference_bytes() {
    let actual = encode_node(&Node::with_id(id("8298948dc66b43edaa221cff9178ae85")));
    assert_eq!(actual, b"\n 8298948dc66b43edaa221cff9178ae85");
}

#[test]
fn decode_node_from_reference_bytes() {
    let actual = decode_node(b"\n 4c76df84639c44f6b9cf3b2a0798d8a3").unwrap();
    assert_eq!(actual, Node::with_id(id("4c76df84-639c-44f6-b9cf-3b2a0798d8a3")));
}

#[test]
fn node_roundtrip_preserves_ids_and_order() {
    let original = sample_tree();
    let restored = decode_node(&encode_node(&original)).unwrap();

    assert_eq!(restored, original);
    let order: Vec<Uuid> = restored.children().iter().map(Node::id).collect();
    assert_eq!(
        order,
        vec![
            id("1f616d205bec4b2e9ab96d4579411410"),
            id("e65465bccf684efbb61c9a00b838a966"),
            id("bfc7fc1c99d244ec98f5a5d040d2db91"),
        ]
    );
}

#[test]
fn children_are_written_after_id_in_stored_order() {
    let child_a = Node::with_id(id("1f616d205bec4b2e9ab96d4579411410"));
    let child_b = Node::with_id(id("e65465bccf684efbb61c9a00b838a966"));
    let root = Node::with_children(
        id("63966bf7d2bf4b65b997571d9d51398c"),
        vec![child_a.clone(), child_b.clone()],
    );

    let mut expected = b"\n 63966bf7d2bf4b65b997571d9d51398c".to_vec();
    for child in [&child_a, &child_b] {
        let encoded = encode_node(child);
        expected.push(0x12);
        expected.push(encoded.len() as u8);
        expected.extend_from_slice(&encoded);
    }
    assert_eq!(encode_node(&root), expected);
}

#[test]
fn deep_chain_roundtrips() {
    let mut node = Node::new();
    for _ in 0..50 {
        node = Node::with_children(Uuid::new_v4(), vec![node]);
    }
    assert_eq!(node.depth(), 51);
    assert_eq!(decode_node(&encode_node(&node)).unwrap(), node);
}

fn chain(depth: usize) -> Node {
    (1..depth).fold(Node::new(), |node, _| {
        Node::with_children(Uuid::new_v4(), vec![node])
    })
}

#[test]
fn chain_past_default_nesting_limit_roundtrips() {
    let node = chain(150);
    assert_eq!(node.depth(), 150);

    let restored = decode_node(&encode_node(&node)).expect("deep chains must decode");
    assert_eq!(restored.depth(), 150);
    assert_eq!(restored, node);
}

#[test]
fn hyphenated_id_on_wire_is_accepted() {
    let bytes = b"\n$4c76df84-639c-44f6-b9cf-3b2a0798d8a3";
    let node = decode_node(bytes).unwrap();
    assert_eq!(node.id(), id("4c76df84639c44f6b9cf3b2a0798d8a3"));
}

#[test]
fn invalid_identifier_is_malformed_identifier() {
    let err = decode_node(b"\n\x05hello").unwrap_err();
    assert!(
        matches!(err, CodecError::MalformedIdentifier { ref value, .. } if value == "hello"),
        "unexpected error: {err}"
    );
}

#[test]
fn empty_buffer_has_no_valid_identifier() {
    let err = decode_node(b"").unwrap_err();
    assert!(matches!(err, CodecError::MalformedIdentifier { .. }), "{err}");
}

#[test]
fn truncated_buffers_are_malformed_tree() {
    let bytes = encode_node(&sample_tree());
    for cut in [1, 10, bytes.len() / 2, bytes.len() - 1] {
        let err = decode_node(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, CodecError::MalformedTree(_)),
            "cut at {cut}: unexpected error {err}"
        );
    }
}

#[test]
fn wrong_wire_type_for_id_is_malformed_tree() {
    // Field 1 as varint instead of length-delimited.
    let err = decode_node(b"\x08\x01").unwrap_err();
    assert!(matches!(err, CodecError::MalformedTree(_)), "{err}");
}
