use crate::models::policy::Acl;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env;
use std::fmt;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments, built once at startup
/// and immutable for the process lifetime.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Public identifier of the signing credential pair.
    pub access_key_id: String,
    /// Secret used to sign policies. Required and never logged.
    pub secret_access_key: String,
    /// Target bucket the issued policies are scoped to.
    pub bucket: String,
    /// Destination prefix for uploaded objects, e.g. `data/`.
    pub key_prefix: String,
    /// Access level applied to uploaded objects.
    pub acl: Acl,
    /// Content type the upload form declares.
    pub content_type: String,
    /// Prefix constraint on acceptable content types (empty = any).
    pub content_type_prefix: String,
    /// Upper bound of the content-length-range condition, in bytes.
    pub max_content_length: u64,
    /// Where the provider redirects the browser after a successful upload.
    pub redirect_url: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("bucket", &self.bucket)
            .field("key_prefix", &self.key_prefix)
            .field("acl", &self.acl)
            .field("content_type", &self.content_type)
            .field("content_type_prefix", &self.content_type_prefix)
            .field("max_content_length", &self.max_content_length)
            .field("redirect_url", &self.redirect_url)
            .finish()
    }
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Signed direct-upload policy issuer")]
pub struct Args {
    /// Host to bind to (overrides UPLOAD_BROKER_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides UPLOAD_BROKER_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Access key id paired with the signing secret (overrides UPLOAD_BROKER_ACCESS_KEY_ID)
    #[arg(long)]
    pub access_key_id: Option<String>,

    /// Secret access key used for signing (overrides UPLOAD_BROKER_SECRET_ACCESS_KEY)
    #[arg(long)]
    pub secret_access_key: Option<String>,

    /// Target bucket (overrides UPLOAD_BROKER_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Object key prefix (overrides UPLOAD_BROKER_KEY_PREFIX)
    #[arg(long)]
    pub key_prefix: Option<String>,

    /// Access level: private or public-read (overrides UPLOAD_BROKER_ACL)
    #[arg(long)]
    pub acl: Option<String>,

    /// Content type declared by the upload form (overrides UPLOAD_BROKER_CONTENT_TYPE)
    #[arg(long)]
    pub content_type: Option<String>,

    /// Content-type prefix constraint (overrides UPLOAD_BROKER_CONTENT_TYPE_PREFIX)
    #[arg(long)]
    pub content_type_prefix: Option<String>,

    /// Maximum upload size in bytes (overrides UPLOAD_BROKER_MAX_CONTENT_LENGTH)
    #[arg(long)]
    pub max_content_length: Option<u64>,

    /// Post-upload redirect URL (overrides UPLOAD_BROKER_REDIRECT_URL)
    #[arg(long)]
    pub redirect_url: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    ///
    /// Credentials have no default: a missing or blank secret key or access
    /// key id aborts startup rather than letting the process sign with an
    /// empty key.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("UPLOAD_BROKER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("UPLOAD_BROKER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing UPLOAD_BROKER_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading UPLOAD_BROKER_PORT"),
        };
        let env_access_key = env::var("UPLOAD_BROKER_ACCESS_KEY_ID").ok();
        let env_secret_key = env::var("UPLOAD_BROKER_SECRET_ACCESS_KEY").ok();
        let env_bucket = env::var("UPLOAD_BROKER_BUCKET").unwrap_or_else(|_| "s3-bucket".into());
        let env_key_prefix =
            env::var("UPLOAD_BROKER_KEY_PREFIX").unwrap_or_else(|_| "data/".into());
        let env_acl = env::var("UPLOAD_BROKER_ACL").unwrap_or_else(|_| "private".into());
        let env_content_type =
            env::var("UPLOAD_BROKER_CONTENT_TYPE").unwrap_or_else(|_| "application/zip".into());
        let env_content_type_prefix =
            env::var("UPLOAD_BROKER_CONTENT_TYPE_PREFIX").unwrap_or_default();
        let env_max_length = match env::var("UPLOAD_BROKER_MAX_CONTENT_LENGTH") {
            Ok(value) => value.parse::<u64>().with_context(|| {
                format!("parsing UPLOAD_BROKER_MAX_CONTENT_LENGTH value `{}`", value)
            })?,
            // 65 MiB
            Err(env::VarError::NotPresent) => 68157440,
            Err(err) => return Err(err).context("reading UPLOAD_BROKER_MAX_CONTENT_LENGTH"),
        };
        let env_redirect = env::var("UPLOAD_BROKER_REDIRECT_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/upload-success".into());

        // --- Merge ---
        let access_key_id = args.access_key_id.or(env_access_key).unwrap_or_default();
        let secret_access_key = args.secret_access_key.or(env_secret_key).unwrap_or_default();
        if access_key_id.trim().is_empty() {
            bail!("access key id is required (UPLOAD_BROKER_ACCESS_KEY_ID or --access-key-id)");
        }
        if secret_access_key.trim().is_empty() {
            bail!(
                "secret access key is required (UPLOAD_BROKER_SECRET_ACCESS_KEY or --secret-access-key)"
            );
        }

        let acl = args
            .acl
            .unwrap_or(env_acl)
            .parse::<Acl>()
            .map_err(anyhow::Error::msg)
            .context("parsing acl configuration")?;

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            access_key_id,
            secret_access_key,
            bucket: args.bucket.unwrap_or(env_bucket),
            key_prefix: args.key_prefix.unwrap_or(env_key_prefix),
            acl,
            content_type: args.content_type.unwrap_or(env_content_type),
            content_type_prefix: args.content_type_prefix.unwrap_or(env_content_type_prefix),
            max_content_length: args.max_content_length.unwrap_or(env_max_length),
            redirect_url: args.redirect_url.unwrap_or(env_redirect),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
