use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::options::FileAttachment;
use crate::Error;

/// Returns a process-unique boundary marker for one multipart body.
pub(crate) fn boundary() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("----formdata-ghttp-{:016x}", nanos ^ seq.rotate_left(48))
}

/// Encodes form fields and file attachments into a `multipart/form-data`
/// body.
///
/// Fields are written first, sorted by name; file parts follow in the order
/// supplied. Each attachment's reader is drained to completion and dropped.
pub(crate) fn encode(
    boundary: &str,
    fields: &HashMap<String, String>,
    files: Vec<FileAttachment>,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();

    let mut fields: Vec<_> = fields.iter().collect();
    fields.sort();
    for (name, value) in fields {
        write!(body, "--{boundary}\r\n")?;
        write!(
            body,
            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
            escape_quotes(name),
        )?;
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for mut file in files {
        write!(body, "--{boundary}\r\n")?;
        write!(
            body,
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            escape_quotes(&file.field_name),
            escape_quotes(&file.file_name),
        )?;
        write!(body, "Content-Type: application/octet-stream\r\n\r\n")?;
        file.data.read_to_end(&mut body)?;
        body.extend_from_slice(b"\r\n");
    }

    write!(body, "--{boundary}--\r\n")?;
    Ok(body)
}

// '\' and '"' would break the quoted-string framing of the header
fn escape_quotes(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
