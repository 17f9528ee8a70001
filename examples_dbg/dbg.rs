use policy_browser::api::{HttpPolicyApi, PolicyApi};
use std::io::{Read, Write};
use std::net::TcpListener;

fn main() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let h = std::thread::spawn(move || {
        let (mut s, _) = listener.accept().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(300));
        let mut buf = [0u8; 4096];
        let n = s.read(&mut buf).unwrap();
        let req = String::from_utf8_lossy(&buf[..n]).to_string();
        let body = r#"{"policy": {"id": 7}, "invoices": [], "payments": []}"#;
        let resp = format!("HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}", body.len(), body);
        s.write_all(resp.as_bytes()).unwrap();
        req
    });
    let api = HttpPolicyApi::new(&base);
    let _ = api.fetch_policy_detail("7", "2015-6-1");
    println!("{:?}", h.join().unwrap());
}
