use anthropic_response::{ResponseContent, ResponseContentBlock, V1MessagesResponse};

const TEXT_RESPONSE: &str = r#"{
    "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
    "type": "message",
    "role": "assistant",
    "content": [
        {"type": "text", "text": "HOLOFS initialized. "},
        {"type": "text", "text": "Type `help` for commands."}
    ],
    "model": "claude-3-5-sonnet-20241022",
    "stop_reason": "end_turn",
    "stop_sequence": null,
    "usage": {"input_tokens": 612, "output_tokens": 48}
}"#;

#[test]
fn test_text_response_deserialization() {
    let response: V1MessagesResponse = serde_json::from_str(TEXT_RESPONSE).unwrap();

    assert_eq!(response.response_type, "message");
    assert_eq!(response.role, "assistant");
    assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
    assert_eq!(response.usage.input_tokens, 612);
    assert_eq!(response.usage.output_tokens, 48);
    assert!(response.usage.cache_read_input_tokens.is_none());
    assert_eq!(response.content.len(), 2);
    assert_eq!(
        response.text(),
        "HOLOFS initialized. Type `help` for commands."
    );
}

#[test]
fn test_unknown_content_block_is_preserved() {
    let json = r#"{
        "id": "msg_1",
        "type": "message",
        "role": "assistant",
        "content": [
            {"type": "redacted_thinking", "data": "EmwKAhgBEgy3va3pzix"},
            {"type": "text", "text": "Done."}
        ],
        "model": "claude-3-5-sonnet-20241022",
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 1, "output_tokens": 1}
    }"#;

    let response: V1MessagesResponse = serde_json::from_str(json).unwrap();
    let blocks = response.blocks();

    match &blocks[0] {
        ResponseContent::Unknown(value) => {
            assert_eq!(value["type"], "redacted_thinking");
            assert_eq!(value["data"], "EmwKAhgBEgy3va3pzix");
        }
        other => panic!("Expected Unknown variant, got {other:?}"),
    }
    assert!(matches!(
        &blocks[1],
        ResponseContent::Block(ResponseContentBlock::Text { .. })
    ));
    assert_eq!(response.text(), "Done.");

    // Content re-serializes exactly as received.
    let content = serde_json::to_value(&response.content).unwrap();
    assert_eq!(
        content,
        serde_json::json!([
            {"type": "redacted_thinking", "data": "EmwKAhgBEgy3va3pzix"},
            {"type": "text", "text": "Done."}
        ])
    );
}

#[test]
fn test_tool_use_and_thinking_blocks() {
    let json = r#"[
        {"type": "thinking", "thinking": "The user wants a listing.", "signature": "sig"},
        {"type": "tool_use", "id": "toolu_1", "name": "ls", "input": {"path": "/"}}
    ]"#;

    let content: Vec<ResponseContent> = serde_json::from_str(json).unwrap();

    match &content[0] {
        ResponseContent::Block(ResponseContentBlock::Thinking {
            thinking,
            signature,
        }) => {
            assert_eq!(thinking, "The user wants a listing.");
            assert_eq!(signature.as_deref(), Some("sig"));
        }
        other => panic!("Expected Thinking block, got {other:?}"),
    }
    match &content[1] {
        ResponseContent::Block(ResponseContentBlock::ToolUse { id, name, input }) => {
            assert_eq!(id, "toolu_1");
            assert_eq!(name, "ls");
            assert_eq!(input["path"], "/");
        }
        other => panic!("Expected ToolUse block, got {other:?}"),
    }
}

#[test]
fn test_unmodelled_fields_on_known_blocks_are_kept() {
    let content = serde_json::json!([
        {
            "type": "text",
            "text": "See the docs.",
            "citations": [{
                "type": "char_location",
                "cited_text": "holofs",
                "document_index": 0,
                "start_char_index": 0,
                "end_char_index": 6
            }]
        },
        {
            "type": "tool_use",
            "id": "t1",
            "name": "ls",
            "input": {},
            "caller": {"type": "direct"}
        }
    ]);
    let json = serde_json::json!({
        "id": "msg_2",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-3-5-sonnet-20241022",
        "stop_reason": "tool_use",
        "stop_sequence": null,
        "usage": {"input_tokens": 3, "output_tokens": 7}
    });

    let response: V1MessagesResponse = serde_json::from_value(json).unwrap();

    assert_eq!(serde_json::to_value(&response.content).unwrap(), content);
    assert_eq!(response.text(), "See the docs.");
    assert!(matches!(
        &response.blocks()[1],
        ResponseContent::Block(ResponseContentBlock::ToolUse { name, .. }) if name == "ls"
    ));
}
