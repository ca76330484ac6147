//! Pure relay logic: message filtering, response chunking, and the mapping
//! from a completion outcome to the ordered replies to deliver. No I/O here,
//! so the whole contract is testable without a gateway connection.

use serenity::model::id::ChannelId;

/// The maximum character length allowed for a single Discord message.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Safety margin kept below the hard limit when splitting long responses.
const CHUNK_MARGIN: usize = 10;

/// The maximum character length of a single response chunk.
pub const CHUNK_LENGTH: usize = MAX_MESSAGE_LENGTH - CHUNK_MARGIN;

/// Reply sent when the AI client failed to construct at startup.
pub const CLIENT_UNAVAILABLE_REPLY: &str =
    "Sorry, the AI service is not ready yet. [Client Error]";

/// Reply sent when a completion request fails for any reason.
pub const REQUEST_FAILED_REPLY: &str =
    "Sorry, I couldn't get an answer (API or network error).";

/// Reply sent when a completion succeeds but yields no text.
pub const WITHHELD_REPLY: &str =
    "Sorry, I can't answer that one due to content policy.";

/// Decides whether an inbound message should be relayed at all.
///
/// Bot-class authors are always discarded to prevent feedback loops. When a
/// target channel is configured, messages from any other channel are
/// discarded as well. Both discards are silent.
pub fn accepts(target: Option<ChannelId>, author_is_bot: bool, origin: ChannelId) -> bool {
    if author_is_bot {
        return false;
    }
    match target {
        Some(channel) => channel == origin,
        None => true,
    }
}

/// Splits a response into ordered chunks of at most [`CHUNK_LENGTH`]
/// characters each. Chunks are contiguous slices of the input, so their
/// concatenation reproduces it exactly; a boundary may fall mid-word.
///
/// Characters are counted while byte offsets are advanced by `len_utf8`, so
/// multi-byte input is never sliced inside a character.
pub fn split_into_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut iter = text.chars();
    let mut pos = 0;
    while pos < text.len() {
        let mut len = 0;
        for ch in iter.by_ref().take(CHUNK_LENGTH) {
            len += ch.len_utf8();
        }
        chunks.push(&text[pos..pos + len]);
        pos += len;
    }
    chunks
}

/// Maps the outcome of a completion request to the ordered replies to send.
///
/// Any error collapses to the fixed fallback reply; a successful but empty
/// completion gets the fixed withheld reply; text within the platform limit
/// is sent verbatim as a single reply; longer text is chunked.
pub fn replies_for<E>(outcome: Result<Option<String>, E>) -> Vec<String> {
    match outcome {
        Err(_) => vec![REQUEST_FAILED_REPLY.to_string()],
        Ok(None) => vec![WITHHELD_REPLY.to_string()],
        Ok(Some(text)) if text.is_empty() => vec![WITHHELD_REPLY.to_string()],
        Ok(Some(text)) => {
            if text.chars().count() <= MAX_MESSAGE_LENGTH {
                vec![text]
            } else {
                split_into_chunks(&text)
                    .into_iter()
                    .map(String::from)
                    .collect()
            }
        }
    }
}
