//! Minimal `multipart/form-data` encoder for single-file uploads.

use uuid::Uuid;

/// Encoded request body plus the matching `Content-Type` header value.
#[derive(Clone, Debug)]
pub(crate) struct MultipartBody {
    pub(crate) content_type: String,
    pub(crate) bytes: Vec<u8>,
}

/// Encode one file part named `field`.
pub(crate) fn encode_file_part(
    field: &str,
    file_name: &str,
    mime: &str,
    data: &[u8],
) -> MultipartBody {
    encode_with_boundary(&new_boundary(), field, file_name, mime, data)
}

fn new_boundary() -> String {
    format!("----reconocimiento{}", Uuid::new_v4().simple())
}

fn encode_with_boundary(
    boundary: &str,
    field: &str,
    file_name: &str,
    mime: &str,
    data: &[u8],
) -> MultipartBody {
    let head = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {mime}\r\n\r\n",
        escape_quoted(field),
        escape_quoted(file_name),
    );
    let tail = format!("\r\n--{boundary}--\r\n");
    let mut bytes = Vec::with_capacity(head.len() + data.len() + tail.len());
    bytes.extend_from_slice(head.as_bytes());
    bytes.extend_from_slice(data);
    bytes.extend_from_slice(tail.as_bytes());
    MultipartBody {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        bytes,
    }
}

/// Percent-escape characters that would break a quoted header parameter.
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
