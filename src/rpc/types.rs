use std::time::Duration;

/// Request counters kept by `SolanaRpcClient`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub transactions_confirmed: u64,
    pub total_response_time_ms: u64,
}

impl RpcStats {
    pub fn record(&mut self, elapsed: Duration, success: bool) {
        self.total_requests += 1;
        self.total_response_time_ms += elapsed.as_millis() as u64;
        if success {
            self.successful_requests += 1;
        } else {
            self.failed_requests += 1;
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            1.0
        } else {
            (self.successful_requests as f64) / (self.total_requests as f64)
        }
    }

    pub fn average_response_time_ms(&self) -> u64 {
        if self.total_requests == 0 {
            0
        } else {
            self.total_response_time_ms / self.total_requests
        }
    }
}
