use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster-server")]
#[command(about = "HTTP service for listing and creating users", long_about = None)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Upper bound on pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Leave the schema alone instead of applying bundled migrations
    #[arg(long, env = "SKIP_MIGRATIONS")]
    pub skip_migrations: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
