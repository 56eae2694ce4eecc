//! The structure returned to a client that requested upload credentials.

use crate::models::policy::Acl;
use serde::{Deserialize, Serialize};

/// Everything a client needs to build a multipart POST form that uploads a
/// file directly to the storage provider.
///
/// Field names follow the provider's form-field contract, hence the
/// non-snake-case renames. The `key` field is a literal template containing
/// the `${filename}` placeholder, which the provider substitutes with the
/// submitted filename at upload time.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadTicket {
    /// Object key template, e.g. `data/${filename}`.
    pub key: String,

    /// Base64-encoded policy document.
    pub policy: String,

    /// Base64-encoded HMAC-SHA1 of `policy`, keyed by the secret credential.
    pub signature: String,

    /// Content type the form should declare for the uploaded file.
    #[serde(rename = "Content-Type")]
    pub content_type: String,

    /// Where the provider redirects the browser after a successful upload.
    pub success_action_redirect: String,

    /// Public identifier of the credential pair that signed the policy.
    #[serde(rename = "AWSAccessKeyId")]
    pub access_key_id: String,

    /// Access level applied to the uploaded object. Must match the `acl`
    /// condition embedded in the policy.
    pub acl: Acl,
}
