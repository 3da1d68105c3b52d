use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,
    /// Comma-separated list of origins allowed through CORS
    #[clap(env, long, default_value = "http://localhost:5173")]
    pub origin_urls: String,
    /// Simulated latency of the mock geocoding step, in milliseconds
    #[clap(env, long, default_value_t = 1000)]
    pub search_delay_ms: u64,
}
