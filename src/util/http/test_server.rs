//! 測試用的本機 HTTP 伺服器，回傳固定內容

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Starts a server on an ephemeral port that answers every request with
/// `status` and `body`, and returns its base url.
pub(crate) async fn serve(status: &'static str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                reply(socket, response.as_bytes()).await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Returns a url on a port nobody listens on.
pub(crate) async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    format!("http://{}", addr)
}

async fn reply(mut socket: TcpStream, response: &[u8]) {
    let mut request = Vec::with_capacity(1024);
    let mut buf = [0u8; 1024];

    // 讀完整個 request header 再回應
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let _ = socket.write_all(response).await;
    let _ = socket.shutdown().await;
}
