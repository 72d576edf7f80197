//! The synthetic request record and its field pools.

use std::fmt;

use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};
use rand_distr::Normal;
use time::PrimitiveDateTime;

use crate::clock;

/// Every record reports the same loopback client.
pub const CLIENT_ADDR: &str = "127.0.0.1";

/// Endpoints a synthetic client hits.
pub const ENDPOINTS: [&str; 6] = [
    "/api/items",
    "/api/checkout",
    "/health",
    "/login",
    "/static/app.js",
    "/search",
];

/// Status pool, success-weighted by repetition.
pub const STATUSES: [u16; 7] = [200, 200, 200, 200, 404, 500, 502];

pub const USER_AGENTS: [&str; 3] = ["Mozilla/5.0", "curl/8.0", "PostmanRuntime/7.0"];

/// Responses never report a latency below this floor.
const MIN_LATENCY_SECS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// 85% GET, 15% POST.
impl Distribution<Method> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Method {
        if rng.random_bool(0.85) {
            Method::Get
        } else {
            Method::Post
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

/// One synthesized HTTP request. Built, written out, and dropped; nothing is
/// retained between records except the clock that stamped it.
#[derive(Debug, Clone)]
pub struct Record {
    pub timestamp: PrimitiveDateTime,
    pub method: Method,
    pub path: &'static str,
    /// `Some(n)` renders as `?q=<n>`; absent on 70% of records.
    pub query: Option<u16>,
    pub status: u16,
    pub size: u32,
    pub user_agent: &'static str,
    pub latency_secs: f64,
}

impl Record {
    /// Samples every field independently. Server errors drag: a 5xx record
    /// has its latency stretched by a 2x-6x factor.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        timestamp: PrimitiveDateTime,
        latency: &Normal<f64>,
    ) -> Self {
        let status = STATUSES[rng.random_range(0..STATUSES.len())];

        let mut latency_secs = latency.sample(rng).max(MIN_LATENCY_SECS);
        if status >= 500 {
            latency_secs *= rng.random_range(2.0..6.0);
        }

        Self {
            timestamp,
            method: rng.random(),
            path: ENDPOINTS[rng.random_range(0..ENDPOINTS.len())],
            query: if rng.random_bool(0.7) {
                None
            } else {
                Some(rng.random_range(1..=999))
            },
            status,
            size: rng.random_range(10..=5000),
            user_agent: USER_AGENTS[rng.random_range(0..USER_AGENTS.len())],
            latency_secs,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = clock::format_nginx(self.timestamp).map_err(|_| fmt::Error)?;
        write!(f, "{CLIENT_ADDR} - - [{ts}] \"{} {}", self.method, self.path)?;
        if let Some(q) = self.query {
            write!(f, "?q={q}")?;
        }
        write!(
            f,
            " HTTP/1.1\" {} {} \"-\" \"{}\" {:.3}",
            self.status, self.size, self.user_agent, self.latency_secs
        )
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};
    use time::macros::datetime;

    use super::*;

    fn sample_one(seed: u64) -> Record {
        let mut rng = SmallRng::seed_from_u64(seed);
        let latency = Normal::new(0.12, 0.08).unwrap();
        Record::sample(&mut rng, datetime!(2025-01-01 00:00:00), &latency)
    }

    #[test]
    fn fields_stay_in_their_pools() {
        for seed in 0..500 {
            let rec = sample_one(seed);
            assert!(ENDPOINTS.contains(&rec.path));
            assert!(STATUSES.contains(&rec.status));
            assert!(USER_AGENTS.contains(&rec.user_agent));
            assert!((10..=5000).contains(&rec.size));
            assert!(rec.latency_secs >= MIN_LATENCY_SECS);
            if let Some(q) = rec.query {
                assert!((1..=999).contains(&q));
            }
        }
    }

    #[test]
    fn renders_common_log_format() {
        let rec = Record {
            timestamp: datetime!(2025-01-01 00:00:02),
            method: Method::Get,
            path: "/health",
            query: None,
            status: 200,
            size: 512,
            user_agent: "curl/8.0",
            latency_secs: 0.1234,
        };
        assert_eq!(
            rec.to_string(),
            "127.0.0.1 - - [01/Jan/2025:00:00:02 -0300] \"GET /health HTTP/1.1\" 200 512 \"-\" \"curl/8.0\" 0.123"
        );
    }

    #[test]
    fn renders_query_suffix() {
        let rec = Record {
            timestamp: datetime!(2025-06-15 12:30:00),
            method: Method::Post,
            path: "/search",
            query: Some(7),
            status: 404,
            size: 10,
            user_agent: "Mozilla/5.0",
            latency_secs: 1.0,
        };
        assert_eq!(
            rec.to_string(),
            "127.0.0.1 - - [15/Jun/2025:12:30:00 -0300] \"POST /search?q=7 HTTP/1.1\" 404 10 \"-\" \"Mozilla/5.0\" 1.000"
        );
    }

    #[test]
    fn method_split_is_get_heavy() {
        let mut rng = SmallRng::seed_from_u64(42);
        let gets = (0..100_000)
            .filter(|_| rng.random::<Method>() == Method::Get)
            .count();
        let frac = gets as f64 / 100_000.0;
        assert!((0.83..0.87).contains(&frac), "GET fraction was {frac}");
    }
}
