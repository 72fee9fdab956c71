//! HTTP/1.1 mínimo: lectura de una petición y escritura de la respuesta.
//!
//! Solo lo que el servicio necesita: una petición por conexión, cuerpo
//! delimitado por `Content-Length` y respuesta con `Connection: close`.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use crate::errors::CoreError;

const MAX_HEADERS: usize = 100;
const MAX_LINE_BYTES: usize = 8 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    /// Primer valor del parámetro de consulta `name`, ya decodificado.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Cabecera por nombre, sin distinguir mayúsculas.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodifica `%XX` y `+` (espacio) de un componente de URL. Las secuencias
/// `%` mal formadas se dejan literales.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => match (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                (Some(h), Some(l)) => {
                    out.push(h * 16 + l);
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Separa ruta y cadena de consulta del destino de la petición.
pub fn parse_target(target: &str) -> (String, Vec<(String, String)>) {
    let (path, query) = match target.split_once('?') {
        Some((p, q)) => (p, q),
        None => (target, ""),
    };
    let params = query.split('&')
                      .filter(|pair| !pair.is_empty())
                      .map(|pair| match pair.split_once('=') {
                          Some((k, v)) => (percent_decode(k), percent_decode(v)),
                          None => (percent_decode(pair), String::new()),
                      })
                      .collect();
    (path.to_string(), params)
}

async fn read_line<R: AsyncRead + Unpin>(reader: &mut BufReader<R>) -> Result<Option<String>, CoreError> {
    let mut buf = Vec::new();
    let n = (&mut *reader).take(MAX_LINE_BYTES as u64).read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }
    if !buf.ends_with(b"\n") {
        return Err(CoreError::BadRequest("línea de cabecera demasiado larga o incompleta".into()));
    }
    let line = String::from_utf8(buf).map_err(|_| CoreError::BadRequest("cabecera no UTF-8".into()))?;
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Lee una petición completa. `Ok(None)` si el cliente cerró sin enviar nada.
pub async fn read_request<R: AsyncRead + Unpin>(reader: &mut BufReader<R>,
                                                max_body: usize)
                                                -> Result<Option<Request>, CoreError> {
    let Some(request_line) = read_line(reader).await? else {
        return Ok(None);
    };
    let mut parts = request_line.split_whitespace();
    let (method, target, version) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(t), Some(v)) => (m, t, v),
        _ => return Err(CoreError::BadRequest(format!("línea de petición inválida: '{request_line}'"))),
    };
    if !version.starts_with("HTTP/1.") {
        return Err(CoreError::BadRequest(format!("versión no soportada: {version}")));
    }
    let (path, query) = parse_target(target);

    let mut headers = Vec::new();
    loop {
        let line = read_line(reader).await?
                                    .ok_or_else(|| CoreError::BadRequest("cabeceras incompletas".into()))?;
        if line.is_empty() {
            break;
        }
        if headers.len() >= MAX_HEADERS {
            return Err(CoreError::BadRequest("demasiadas cabeceras".into()));
        }
        let (name, value) = line.split_once(':')
                                .ok_or_else(|| CoreError::BadRequest(format!("cabecera inválida: '{line}'")))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let mut request = Request { method: method.to_ascii_uppercase(),
                                path,
                                query,
                                headers,
                                body: Vec::new() };
    if let Some(encoding) = request.header("transfer-encoding") {
        if !encoding.eq_ignore_ascii_case("identity") {
            return Err(CoreError::BadRequest(format!("Transfer-Encoding '{encoding}' no soportado; enviar Content-Length")));
        }
    }
    let length = match request.header("content-length") {
        Some(v) => v.parse::<usize>()
                    .map_err(|_| CoreError::BadRequest(format!("Content-Length inválido: '{v}'")))?,
        None => 0,
    };
    if length > max_body {
        return Err(CoreError::PayloadTooLarge(length));
    }
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).await?;
    request.body = body;
    Ok(Some(request))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}

impl Response {
    pub fn json(status: u16, value: &Value) -> Self {
        Self { status,
               content_type: "application/json",
               body: value.to_string().into_bytes() }
    }

    /// `{"error": message}` con el código indicado.
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, &serde_json::json!({ "error": message }))
    }

    pub fn svg(body: Vec<u8>) -> Self {
        Self { status: 200,
               content_type: "image/svg+xml",
               body }
    }

    pub fn no_content() -> Self {
        Self { status: 204,
               content_type: "text/plain",
               body: Vec::new() }
    }

    /// Cuerpo como JSON, si lo es.
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Bytes listos para escribir en el socket.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!("HTTP/1.1 {} {}\r\n\
                            Content-Type: {}\r\n\
                            Content-Length: {}\r\n\
                            Access-Control-Allow-Origin: *\r\n\
                            Access-Control-Allow-Methods: GET, POST, OPTIONS\r\n\
                            Access-Control-Allow-Headers: Content-Type\r\n\
                            Connection: close\r\n\r\n",
                           self.status,
                           reason_phrase(self.status),
                           self.content_type,
                           self.body.len());
        let mut out = head.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read(raw: &str, max_body: usize) -> Result<Option<Request>, CoreError> {
        let mut reader = BufReader::new(raw.as_bytes());
        read_request(&mut reader, max_body).await
    }

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(percent_decode("c1ccccc1%5BNH4%2B%5D"), "c1ccccc1[NH4+]");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn splits_target_into_path_and_query() {
        let (path, query) = parse_target("/api/molecules/image?smiles=C%3DO&flag");
        assert_eq!(path, "/api/molecules/image");
        assert_eq!(query, vec![("smiles".to_string(), "C=O".to_string()), ("flag".to_string(), String::new())]);
    }

    #[tokio::test]
    async fn reads_request_with_body() {
        let raw = "POST /api/molecules/parse HTTP/1.1\r\nHost: x\r\nContent-Type: application/json\r\nContent-Length: 17\r\n\r\n{\"smiles\":\"CCO\"}\n";
        let req = read(raw, 1024).await.unwrap().unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/molecules/parse");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.body, b"{\"smiles\":\"CCO\"}\n".to_vec());
    }

    #[tokio::test]
    async fn empty_connection_is_not_an_error() {
        assert!(read("", 1024).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_malformed_and_oversized_requests() {
        assert!(matches!(read("GARBAGE\r\n\r\n", 1024).await, Err(CoreError::BadRequest(_))));
        let big = "POST /x HTTP/1.1\r\nContent-Length: 5000\r\n\r\n";
        assert!(matches!(read(big, 1024).await, Err(CoreError::PayloadTooLarge(5000))));
        let chunked = "POST /x HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n7\r\n{\"a\":1}\r\n0\r\n\r\n";
        assert!(matches!(read(chunked, 1024).await, Err(CoreError::BadRequest(m)) if m.contains("chunked")));
    }

    #[test]
    fn response_carries_cors_and_length() {
        let bytes = Response::error(400, "SMILES string is required").to_bytes();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(text.contains("Access-Control-Allow-Origin: *\r\n"));
        assert!(text.ends_with("{\"error\":\"SMILES string is required\"}"));
    }
}
