/// A realistic successful chat completion body, used wherever tests need the
/// service to answer something plausible.
pub fn completion_response_fixture() -> &'static str {
    return r#"{
  "id": "chatcmpl-8Zl9xK2f",
  "object": "chat.completion",
  "created": 1700000000,
  "model": "gpt-4o",
  "choices": [
    {
      "index": 0,
      "message": {
        "role": "assistant",
        "content": "La capitale de la France est Paris."
      },
      "finish_reason": "stop"
    }
  ],
  "usage": {
    "prompt_tokens": 14,
    "completion_tokens": 9,
    "total_tokens": 23
  }
}"#;
}

/// A service-side error body in the provider's own shape. The core passes it
/// through verbatim rather than classifying it.
pub fn error_response_fixture() -> &'static str {
    return r#"{
  "error": {
    "message": "Incorrect API key provided.",
    "type": "invalid_request_error",
    "param": null,
    "code": "invalid_api_key"
  }
}"#;
}
