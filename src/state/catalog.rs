//! Static entry-type catalog: display metadata, form layout, list summaries.
//!
//! DESIGN
//! ======
//! Everything here is presentation data keyed by `EntryKind` or matched on
//! `EntryDetails`. Adding a type means adding a variant, and every `match`
//! below stops compiling until the new type is handled.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Entry, EntryDetails, EntryKind};

/// Display metadata for one entry type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryTypeInfo {
    pub kind: EntryKind,
    pub label: &'static str,
    /// SVG path data for a 24x24 stroke icon.
    pub icon_path: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub const ENTRY_TYPES: &[EntryTypeInfo] = &[
    EntryTypeInfo {
        kind: EntryKind::Login,
        label: "Logins",
        icon_path: "M15 7a2 2 0 012 2m4 0a6 6 0 01-7.743 5.743L11 17H9v2H7v2H4a1 1 0 01-1-1v-2.586a1 1 0 01.293-.707l5.964-5.964A6 6 0 1121 9z",
        color: "text-vault-400",
        bg_color: "bg-vault-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::Note,
        label: "Notes",
        icon_path: "M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z",
        color: "text-yellow-400",
        bg_color: "bg-yellow-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::CreditCard,
        label: "Credit Cards",
        icon_path: "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z",
        color: "text-purple-400",
        bg_color: "bg-purple-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::Identity,
        label: "Identities",
        icon_path: "M10 6H5a2 2 0 00-2 2v9a2 2 0 002 2h14a2 2 0 002-2V8a2 2 0 00-2-2h-5m-4 0V5a2 2 0 114 0v1m-4 0a2 2 0 104 0m-5 8a2 2 0 100-4 2 2 0 000 4zm0 0c1.306 0 2.417.835 2.83 2M9 14a3.001 3.001 0 00-2.83 2M15 11h3m-3 4h2",
        color: "text-blue-400",
        bg_color: "bg-blue-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::ApiCredential,
        label: "API Credentials",
        icon_path: "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        color: "text-orange-400",
        bg_color: "bg-orange-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::Database,
        label: "Databases",
        icon_path: "M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4m0 5c0 2.21-3.582 4-8 4s-8-1.79-8-4",
        color: "text-cyan-400",
        bg_color: "bg-cyan-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::Server,
        label: "Servers",
        icon_path: "M5 12h14M5 12a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v4a2 2 0 01-2 2M5 12a2 2 0 00-2 2v4a2 2 0 002 2h14a2 2 0 002-2v-4a2 2 0 00-2-2m-2-4h.01M17 16h.01",
        color: "text-red-400",
        bg_color: "bg-red-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::SoftwareLicense,
        label: "Software Licenses",
        icon_path: "M9 12l2 2 4-4M7.835 4.697a3.42 3.42 0 001.946-.806 3.42 3.42 0 014.438 0 3.42 3.42 0 001.946.806 3.42 3.42 0 013.138 3.138 3.42 3.42 0 00.806 1.946 3.42 3.42 0 010 4.438 3.42 3.42 0 00-.806 1.946 3.42 3.42 0 01-3.138 3.138 3.42 3.42 0 00-1.946.806 3.42 3.42 0 01-4.438 0 3.42 3.42 0 00-1.946-.806 3.42 3.42 0 01-3.138-3.138 3.42 3.42 0 00-.806-1.946 3.42 3.42 0 010-4.438 3.42 3.42 0 00.806-1.946 3.42 3.42 0 013.138-3.138z",
        color: "text-pink-400",
        bg_color: "bg-pink-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::SshKey,
        label: "SSH Keys",
        icon_path: "M8 11V7a4 4 0 118 0m-4 8v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2z",
        color: "text-emerald-400",
        bg_color: "bg-emerald-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::Wifi,
        label: "WiFi Networks",
        icon_path: "M8.111 16.404a5.5 5.5 0 017.778 0M12 20h.01m-7.08-7.071c3.904-3.905 10.236-3.905 14.141 0M1.394 9.393c5.857-5.857 15.355-5.857 21.213 0",
        color: "text-indigo-400",
        bg_color: "bg-indigo-500/20",
    },
    EntryTypeInfo {
        kind: EntryKind::BankAccount,
        label: "Bank Accounts",
        icon_path: "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
        color: "text-teal-400",
        bg_color: "bg-teal-500/20",
    },
];

pub fn entry_type(kind: EntryKind) -> &'static EntryTypeInfo {
    match kind {
        EntryKind::Login => &ENTRY_TYPES[0],
        EntryKind::Note => &ENTRY_TYPES[1],
        EntryKind::CreditCard => &ENTRY_TYPES[2],
        EntryKind::Identity => &ENTRY_TYPES[3],
        EntryKind::ApiCredential => &ENTRY_TYPES[4],
        EntryKind::Database => &ENTRY_TYPES[5],
        EntryKind::Server => &ENTRY_TYPES[6],
        EntryKind::SoftwareLicense => &ENTRY_TYPES[7],
        EntryKind::SshKey => &ENTRY_TYPES[8],
        EntryKind::Wifi => &ENTRY_TYPES[9],
        EntryKind::BankAccount => &ENTRY_TYPES[10],
    }
}

// =============================================================
// Form layout
// =============================================================

/// How a field is edited and displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Url,
    Email,
    /// Masked until revealed; offers copy.
    Secret,
    /// Multi-line plain text.
    Block,
    /// Multi-line and masked, e.g. private keys.
    SecretBlock,
}

impl FieldInput {
    pub fn is_secret(self) -> bool {
        matches!(self, FieldInput::Secret | FieldInput::SecretBlock)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldInput::Block | FieldInput::SecretBlock)
    }

    pub fn html_type(self) -> &'static str {
        match self {
            FieldInput::Url => "url",
            FieldInput::Email => "email",
            FieldInput::Secret | FieldInput::SecretBlock => "password",
            FieldInput::Text | FieldInput::Block => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
    /// Heading this field is grouped under, for long forms.
    pub section: Option<&'static str>,
}

const fn field(key: &'static str, label: &'static str, input: FieldInput) -> FieldSpec {
    FieldSpec { key, label, input, section: None }
}

const fn in_section(section: &'static str, key: &'static str, label: &'static str, input: FieldInput) -> FieldSpec {
    FieldSpec { key, label, input, section: Some(section) }
}

use FieldInput::{Block, Email, Secret, SecretBlock, Text, Url};

const LOGIN_FIELDS: &[FieldSpec] = &[
    field("url", "Website", Url),
    field("username", "Username", Text),
    field("password", "Password", Secret),
];

const CREDIT_CARD_FIELDS: &[FieldSpec] = &[
    field("cardholder_name", "Cardholder Name", Text),
    field("card_number", "Card Number", Secret),
    field("expiration_date", "Expiration Date", Text),
    field("security_code", "Security Code", Secret),
    field("pin", "PIN", Secret),
];

const IDENTITY_FIELDS: &[FieldSpec] = &[
    in_section("Personal", "prefix_title", "Title", Text),
    in_section("Personal", "full_name", "Full Name", Text),
    in_section("Personal", "email", "Email", Email),
    in_section("Personal", "phone", "Phone", Text),
    in_section("Personal", "birth_date", "Birth Date", Text),
    in_section("Personal", "gender", "Gender", Text),
    in_section("Address", "organization", "Organization", Text),
    in_section("Address", "address", "Address", Text),
    in_section("Address", "postal_code", "Postal Code", Text),
    in_section("Address", "city", "City", Text),
    in_section("Address", "state", "State / Province", Text),
    in_section("Address", "country", "Country", Text),
    in_section("Contact", "ssn", "Social Security Number", Secret),
    in_section("Contact", "passport_number", "Passport Number", Secret),
    in_section("Contact", "license_number", "Driver's License", Secret),
    in_section("Contact", "website", "Website", Url),
    in_section("Contact", "x_handle", "X", Text),
    in_section("Contact", "linkedin", "LinkedIn", Text),
    in_section("Contact", "reddit", "Reddit", Text),
    in_section("Contact", "facebook", "Facebook", Text),
    in_section("Contact", "yahoo", "Yahoo", Text),
    in_section("Contact", "instagram", "Instagram", Text),
    in_section("Work", "company", "Company", Text),
    in_section("Work", "job_title", "Job Title", Text),
    in_section("Work", "work_website", "Work Website", Url),
    in_section("Work", "work_phone", "Work Phone", Text),
    in_section("Work", "work_email", "Work Email", Email),
];

const API_CREDENTIAL_FIELDS: &[FieldSpec] = &[
    field("api_key", "API Key", Secret),
    field("api_secret", "API Secret", Secret),
    field("expiration_date", "Expiration Date", Text),
    field("permissions", "Permissions", Text),
];

const DATABASE_FIELDS: &[FieldSpec] = &[
    field("host", "Host", Text),
    field("port", "Port", Text),
    field("username", "Username", Text),
    field("password", "Password", Secret),
    field("database_type", "Database Type", Text),
    field("database_name", "Database Name", Text),
];

const SERVER_FIELDS: &[FieldSpec] = &[
    field("ip_address", "IP Address", Text),
    field("hostname", "Hostname", Text),
    field("os", "Operating System", Text),
    field("username", "Username", Text),
    field("password", "Password", Secret),
];

const SOFTWARE_LICENSE_FIELDS: &[FieldSpec] = &[
    field("license_key", "License Key", Secret),
    field("product", "Product", Text),
    field("expiry_date", "Expiry Date", Text),
    field("owner", "Licensed To", Text),
];

const SSH_KEY_FIELDS: &[FieldSpec] = &[
    field("public_key", "Public Key", Block),
    field("private_key", "Private Key", SecretBlock),
    field("passphrase", "Passphrase", Secret),
    field("username", "Username", Text),
    field("host", "Host", Text),
];

const WIFI_FIELDS: &[FieldSpec] = &[
    field("ssid", "Network Name (SSID)", Text),
    field("password", "Password", Secret),
    field("security_type", "Security Type", Text),
];

const BANK_ACCOUNT_FIELDS: &[FieldSpec] = &[
    field("bank_name", "Bank Name", Text),
    field("account_number", "Account Number", Secret),
    field("routing_number", "Routing Number", Text),
    field("account_type", "Account Type", Text),
    field("iban", "IBAN", Text),
    field("swift_bic", "SWIFT / BIC", Text),
    field("holder_name", "Account Holder", Text),
];

/// Type-specific form fields for `kind`, in display order. `title` and
/// `notes` are rendered separately for every type.
pub fn form_fields(kind: EntryKind) -> &'static [FieldSpec] {
    match kind {
        EntryKind::Login => LOGIN_FIELDS,
        EntryKind::Note => &[],
        EntryKind::CreditCard => CREDIT_CARD_FIELDS,
        EntryKind::Identity => IDENTITY_FIELDS,
        EntryKind::ApiCredential => API_CREDENTIAL_FIELDS,
        EntryKind::Database => DATABASE_FIELDS,
        EntryKind::Server => SERVER_FIELDS,
        EntryKind::SoftwareLicense => SOFTWARE_LICENSE_FIELDS,
        EntryKind::SshKey => SSH_KEY_FIELDS,
        EntryKind::Wifi => WIFI_FIELDS,
        EntryKind::BankAccount => BANK_ACCOUNT_FIELDS,
    }
}

// =============================================================
// List summaries
// =============================================================

/// Fields matched by the dashboard search box.
pub const SEARCH_FIELDS: &[&str] = &[
    "title",
    "username",
    "url",
    "full_name",
    "email",
    "ssid",
    "host",
    "hostname",
    "ip_address",
    "bank_name",
    "product",
    "cardholder_name",
    "database_type",
];

/// Primary line under an entry's title in the list.
pub fn entry_subtitle(entry: &Entry) -> String {
    let subtitle = match &entry.details {
        EntryDetails::Login(f) => &f.username,
        EntryDetails::Note(f) => &f.preview,
        EntryDetails::CreditCard(f) => &f.cardholder_name,
        EntryDetails::Identity(f) => &f.full_name,
        EntryDetails::ApiCredential(f) => &f.permissions,
        EntryDetails::Database(f) => &f.database_type,
        EntryDetails::Server(f) if !f.hostname.is_empty() => &f.hostname,
        EntryDetails::Server(f) => &f.ip_address,
        EntryDetails::SoftwareLicense(f) => &f.product,
        EntryDetails::SshKey(f) => &f.username,
        EntryDetails::Wifi(f) => &f.ssid,
        EntryDetails::BankAccount(f) => &f.bank_name,
        EntryDetails::Unknown => return String::new(),
    };
    subtitle.clone()
}

/// Secondary, dimmer line in the list.
pub fn entry_meta(entry: &Entry) -> String {
    match &entry.details {
        EntryDetails::Login(f) => f.url.clone(),
        EntryDetails::Note(_) | EntryDetails::Unknown => String::new(),
        EntryDetails::CreditCard(f) => masked_last4(&f.card_last4),
        EntryDetails::Identity(f) => f.email.clone(),
        EntryDetails::ApiCredential(f) => f.expiration_date.clone(),
        EntryDetails::Database(f) => f.host.clone(),
        EntryDetails::Server(f) => f.os.clone(),
        EntryDetails::SoftwareLicense(f) => f.expiry_date.clone(),
        EntryDetails::SshKey(f) => f.host.clone(),
        EntryDetails::Wifi(f) => f.security_type.clone(),
        EntryDetails::BankAccount(f) => masked_last4(&f.account_last4),
    }
}

fn masked_last4(last4: &str) -> String {
    if last4.is_empty() {
        String::new()
    } else {
        format!("•••• {last4}")
    }
}
