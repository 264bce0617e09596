//! HTTP Adapter - 远端扫描 / 分割服务客户端

mod http_scan_client;
mod http_split_client;
mod service_client;

pub use http_scan_client::HttpScanClient;
pub use http_split_client::HttpSplitClient;
pub use service_client::HttpServiceConfig;
