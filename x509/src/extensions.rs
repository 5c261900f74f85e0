//! The handful of v3 extensions reported in a certificate record.
//!
//! A malformed or duplicated extension is treated as absent.

use log::debug;
use x509_parser::prelude::*;

/// DNS names from subjectAltName, in certificate order.
pub(crate) fn dns_names(cert: &X509Certificate<'_>) -> Vec<String> {
    match cert.subject_alternative_name() {
        Ok(Some(san)) => san
            .value
            .general_names
            .iter()
            .filter_map(|name| match name {
                GeneralName::DNSName(dns) => Some(dns.to_string()),
                _ => None,
            })
            .collect(),
        Ok(None) => vec![],
        Err(e) => {
            debug!("ignoring subjectAltName: {e}");
            vec![]
        }
    }
}

pub(crate) fn is_ca(cert: &X509Certificate<'_>) -> bool {
    match cert.basic_constraints() {
        Ok(Some(bc)) => bc.value.ca,
        Ok(None) => false,
        Err(e) => {
            debug!("ignoring basicConstraints: {e}");
            false
        }
    }
}

/// Extended key usages as readable labels. Unlisted purposes are reported
/// as `Unknown (<oid>)` after the listed ones.
pub(crate) fn extended_key_usages(cert: &X509Certificate<'_>) -> Vec<String> {
    let eku = match cert.extended_key_usage() {
        Ok(Some(eku)) => eku.value,
        Ok(None) => return vec![],
        Err(e) => {
            debug!("ignoring extendedKeyUsage: {e}");
            return vec![];
        }
    };

    let purposes = [
        (eku.any, "Any"),
        (eku.server_auth, "Server Authentication"),
        (eku.client_auth, "Client Authentication"),
        (eku.code_signing, "Code Signing"),
        (eku.email_protection, "Email Protection"),
        (eku.time_stamping, "Time Stamping"),
        (eku.ocsp_signing, "OCSP Signing"),
    ];
    purposes
        .into_iter()
        .filter(|(present, _)| *present)
        .map(|(_, label)| label.to_string())
        .chain(
            eku.other
                .iter()
                .map(|oid| format!("Unknown ({})", oid.to_id_string())),
        )
        .collect()
}
