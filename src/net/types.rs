//! Wire DTOs for the vault JSON API.
//!
//! DESIGN
//! ======
//! Entry-specific fields are a tagged union keyed by the JSON `type` field, so
//! a variant only carries the fields that mean something for it and every
//! per-type mapping is an exhaustive `match`. Unrecognised types decode as
//! `EntryDetails::Unknown` rather than failing a whole list response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The eleven entry types the vault understands, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Login,
    Note,
    CreditCard,
    Identity,
    ApiCredential,
    Database,
    Server,
    SoftwareLicense,
    SshKey,
    Wifi,
    BankAccount,
}

impl EntryKind {
    pub const ALL: [EntryKind; 11] = [
        EntryKind::Login,
        EntryKind::Note,
        EntryKind::CreditCard,
        EntryKind::Identity,
        EntryKind::ApiCredential,
        EntryKind::Database,
        EntryKind::Server,
        EntryKind::SoftwareLicense,
        EntryKind::SshKey,
        EntryKind::Wifi,
        EntryKind::BankAccount,
    ];

    /// Wire name used in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Login => "login",
            EntryKind::Note => "note",
            EntryKind::CreditCard => "credit_card",
            EntryKind::Identity => "identity",
            EntryKind::ApiCredential => "api_credential",
            EntryKind::Database => "database",
            EntryKind::Server => "server",
            EntryKind::SoftwareLicense => "software_license",
            EntryKind::SshKey => "ssh_key",
            EntryKind::Wifi => "wifi",
            EntryKind::BankAccount => "bank_account",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// Stored entries may carry `null` for a field that was never filled in.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declares a per-type field struct plus string-keyed accessors so the form
/// can bind every field uniformly by its wire name. Fields after `;` are
/// read-only list previews computed by the server.
macro_rules! entry_fields {
    ($(#[$meta:meta])* $name:ident { $($field:ident),* $(,)? $(; $($preview:ident),+ $(,)?)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(deserialize_with = "null_as_empty")]
                pub $field: String,
            )*
            $($(
                #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
                pub $preview: String,
            )+)?
        }

        impl $name {
            /// Wire names of the editable fields on this type, in form order.
            pub const KEYS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $(stringify!($field) => Some(self.$field.as_str()),)*
                    $($(stringify!($preview) => Some(self.$preview.as_str()),)+)?
                    _ => None,
                }
            }

            fn get_mut(&mut self, key: &str) -> Option<&mut String> {
                match key {
                    $(stringify!($field) => Some(&mut self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

entry_fields!(
    /// Website login.
    LoginFields { url, username, password }
);

entry_fields!(
    /// Secure note. The body lives in the shared `notes` field; `preview`
    /// is the server's truncated copy sent in list responses.
    NoteFields { ; preview }
);

entry_fields!(
    CreditCardFields { cardholder_name, card_number, expiration_date, security_code, pin; card_last4 }
);

entry_fields!(
    IdentityFields {
        prefix_title,
        full_name,
        email,
        phone,
        birth_date,
        gender,
        organization,
        address,
        postal_code,
        city,
        state,
        country,
        ssn,
        passport_number,
        license_number,
        website,
        x_handle,
        linkedin,
        reddit,
        facebook,
        yahoo,
        instagram,
        company,
        job_title,
        work_website,
        work_phone,
        work_email,
    }
);

entry_fields!(ApiCredentialFields { api_key, api_secret, expiration_date, permissions });

entry_fields!(DatabaseFields { host, port, username, password, database_type, database_name });

entry_fields!(ServerFields { ip_address, hostname, os, username, password });

entry_fields!(SoftwareLicenseFields { license_key, product, expiry_date, owner });

entry_fields!(SshKeyFields { public_key, private_key, passphrase, username, host });

entry_fields!(WifiFields { ssid, password, security_type });

entry_fields!(
    BankAccountFields {
        bank_name,
        account_number,
        routing_number,
        account_type,
        iban,
        swift_bic,
        holder_name;
        account_last4
    }
);

/// Type-specific payload of an entry, tagged by the JSON `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryDetails {
    Login(LoginFields),
    Note(NoteFields),
    CreditCard(CreditCardFields),
    Identity(IdentityFields),
    ApiCredential(ApiCredentialFields),
    Database(DatabaseFields),
    Server(ServerFields),
    SoftwareLicense(SoftwareLicenseFields),
    SshKey(SshKeyFields),
    Wifi(WifiFields),
    BankAccount(BankAccountFields),
    /// A `type` this client does not know about.
    #[serde(other)]
    Unknown,
}

impl EntryDetails {
    /// All-blank payload for `kind`.
    pub fn blank(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Login => Self::Login(LoginFields::default()),
            EntryKind::Note => Self::Note(NoteFields::default()),
            EntryKind::CreditCard => Self::CreditCard(CreditCardFields::default()),
            EntryKind::Identity => Self::Identity(IdentityFields::default()),
            EntryKind::ApiCredential => Self::ApiCredential(ApiCredentialFields::default()),
            EntryKind::Database => Self::Database(DatabaseFields::default()),
            EntryKind::Server => Self::Server(ServerFields::default()),
            EntryKind::SoftwareLicense => Self::SoftwareLicense(SoftwareLicenseFields::default()),
            EntryKind::SshKey => Self::SshKey(SshKeyFields::default()),
            EntryKind::Wifi => Self::Wifi(WifiFields::default()),
            EntryKind::BankAccount => Self::BankAccount(BankAccountFields::default()),
        }
    }

    pub fn kind(&self) -> Option<EntryKind> {
        match self {
            Self::Login(_) => Some(EntryKind::Login),
            Self::Note(_) => Some(EntryKind::Note),
            Self::CreditCard(_) => Some(EntryKind::CreditCard),
            Self::Identity(_) => Some(EntryKind::Identity),
            Self::ApiCredential(_) => Some(EntryKind::ApiCredential),
            Self::Database(_) => Some(EntryKind::Database),
            Self::Server(_) => Some(EntryKind::Server),
            Self::SoftwareLicense(_) => Some(EntryKind::SoftwareLicense),
            Self::SshKey(_) => Some(EntryKind::SshKey),
            Self::Wifi(_) => Some(EntryKind::Wifi),
            Self::BankAccount(_) => Some(EntryKind::BankAccount),
            Self::Unknown => None,
        }
    }

    /// Editable field keys of this variant, in form order.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::Login(_) => LoginFields::KEYS,
            Self::Note(_) => NoteFields::KEYS,
            Self::CreditCard(_) => CreditCardFields::KEYS,
            Self::Identity(_) => IdentityFields::KEYS,
            Self::ApiCredential(_) => ApiCredentialFields::KEYS,
            Self::Database(_) => DatabaseFields::KEYS,
            Self::Server(_) => ServerFields::KEYS,
            Self::SoftwareLicense(_) => SoftwareLicenseFields::KEYS,
            Self::SshKey(_) => SshKeyFields::KEYS,
            Self::Wifi(_) => WifiFields::KEYS,
            Self::BankAccount(_) => BankAccountFields::KEYS,
            Self::Unknown => &[],
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        match self {
            Self::Login(f) => f.get(key),
            Self::Note(f) => f.get(key),
            Self::CreditCard(f) => f.get(key),
            Self::Identity(f) => f.get(key),
            Self::ApiCredential(f) => f.get(key),
            Self::Database(f) => f.get(key),
            Self::Server(f) => f.get(key),
            Self::SoftwareLicense(f) => f.get(key),
            Self::SshKey(f) => f.get(key),
            Self::Wifi(f) => f.get(key),
            Self::BankAccount(f) => f.get(key),
            Self::Unknown => None,
        }
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        match self {
            Self::Login(f) => f.get_mut(key),
            Self::Note(f) => f.get_mut(key),
            Self::CreditCard(f) => f.get_mut(key),
            Self::Identity(f) => f.get_mut(key),
            Self::ApiCredential(f) => f.get_mut(key),
            Self::Database(f) => f.get_mut(key),
            Self::Server(f) => f.get_mut(key),
            Self::SoftwareLicense(f) => f.get_mut(key),
            Self::SshKey(f) => f.get_mut(key),
            Self::Wifi(f) => f.get_mut(key),
            Self::BankAccount(f) => f.get_mut(key),
            Self::Unknown => None,
        }
    }
}

/// One stored secret as exchanged with the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Server-assigned identifier; absent until the entry is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(flatten)]
    pub details: EntryDetails,
}

impl Entry {
    /// A new, unsaved entry of `kind` with every declared field blank.
    pub fn blank(kind: EntryKind) -> Self {
        Self {
            id: None,
            title: String::new(),
            notes: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            details: EntryDetails::blank(kind),
        }
    }

    pub fn kind(&self) -> Option<EntryKind> {
        self.details.kind()
    }

    /// Read a field by wire name. `title` and `notes` resolve for every type.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(self.title.as_str()),
            "notes" => Some(self.notes.as_str()),
            _ => self.details.get(key),
        }
    }

    /// Write a field by wire name. Returns `false` if this type has no such field.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "title" => Some(&mut self.title),
            "notes" => Some(&mut self.notes),
            _ => self.details.get_mut(key),
        };
        match slot {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}

/// `GET /api/entries` body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EntryList {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// `GET /api/entries/{id}` body.
#[derive(Clone, Debug, Deserialize)]
pub struct EntryEnvelope {
    pub entry: Entry,
}

/// `POST`/`PUT /api/entries` body. Older servers omit `entry`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SavedEntry {
    #[serde(default)]
    pub entry: Option<Entry>,
}

/// Error payload returned with non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub master_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetupRequest {
    pub master_password: String,
    pub confirm_password: String,
}
