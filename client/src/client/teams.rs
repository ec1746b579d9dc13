use base64::{Engine, prelude::BASE64_STANDARD};
use cynic::QueryBuilder;
use rsa::{
    Oaep, RsaPublicKey,
    pkcs8::{DecodePublicKey, der::pem},
};
use sha2::Sha256;

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    api::types::*,
    errors::{ErrorKind, OperationContext, Result},
};

const PEM_LABEL: &str = "RSA PUBLIC KEY";

const BEGIN_MARKER: &str = "-----BEGIN ";
const END_MARKER: &str = "-----END ";
const MARKER_CLOSE: &str = "-----";

/// Returns the first PEM block of `text`, ignoring whatever surrounds it.
fn first_pem_block(text: &str) -> Option<&str> {
    let block = &text[text.find(BEGIN_MARKER)?..];
    let end = block.find(END_MARKER)? + END_MARKER.len();
    let close = block[end..].find(MARKER_CLOSE)? + end + MARKER_CLOSE.len();
    Some(&block[..close])
}

/// Parses the team key: a PKIX (SubjectPublicKeyInfo) body wrapped in an
/// `RSA PUBLIC KEY` PEM block.
fn parse_tpg_public_key(text: &str) -> Result<RsaPublicKey> {
    let block = first_pem_block(text).ok_or_else(|| ErrorKind::InvalidPublicKey("no PEM block found".into()))?;

    let (label, der) = pem::decode_vec(block.as_bytes()).map_err(|e| ErrorKind::InvalidPublicKey(e.to_string()))?;
    if label != PEM_LABEL {
        return Err(ErrorKind::InvalidPublicKey(format!("expected {PEM_LABEL} PEM block, got {label}")).into());
    }

    Ok(RsaPublicKey::from_public_key_der(&der).map_err(|e| ErrorKind::InvalidPublicKey(e.to_string()))?)
}

fn encrypt_with_key(key: &RsaPublicKey, data: &[u8]) -> Result<String> {
    let encrypted = key
        .encrypt(&mut rand::thread_rng(), Oaep::new::<Sha256>(), data)
        .map_err(ErrorKind::from)?;

    Ok(BASE64_STANDARD.encode(encrypted))
}

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Fetches the PEM encoded public key of the team's third-party gateway.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_tpg_public_key(&self) -> Result<String> {
        self.executor
            .query(QueryTeam::build(TeamVariables {
                team_slug: self.team_slug.clone(),
            }))
            .await
            .and_then(|resp| resp.team.ok_or_else(|| ErrorKind::NoData.into()))
            .map(|team| team.tpg_public_key)
            .context("get_tpg_public_key")
    }

    /// Encrypts an already url-encoded PII payload with the team key.
    ///
    /// The result is the base64 encoded RSA-OAEP (SHA-256) ciphertext.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn encrypt_pii(&self, encoded_pii: &str) -> Result<String> {
        let pem = self.get_tpg_public_key().await.context("encrypt_pii")?;
        let key = parse_tpg_public_key(&pem).context("encrypt_pii")?;

        encrypt_with_key(&key, encoded_pii.as_bytes()).context("encrypt_pii")
    }

    /// Form-encodes the name and email of a user and encrypts them with the team key.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn encrypt_user_pii(&self, first_name: &str, last_name: &str, email: &str) -> Result<String> {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("e", email)
            .append_pair("fn", first_name)
            .append_pair("ln", last_name)
            .finish();

        self.encrypt_pii(&encoded).await.context("encrypt_user_pii")
    }
}
