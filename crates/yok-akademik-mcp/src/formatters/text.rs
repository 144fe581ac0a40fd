//! Text block rendering for YOK Akademik responses.
//!
//! The templates are Turkish, matching what the backend's users expect.
//! Empty string fields render as "Belirtilmemiş" (unspecified).

use crate::models::{Collaborator, CollaboratorsResponse, Profile, SearchResponse};

/// Placeholder for empty fields.
const UNSPECIFIED: &str = "Belirtilmemiş";

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() { UNSPECIFIED } else { value }
}

/// Error text for a search the backend rejected (`success: false`).
#[must_use]
pub fn search_failed_text() -> String {
    "Error: Search request was not successful".to_string()
}

/// Error text for a collaborator lookup the backend rejected, carrying
/// the raw response for diagnostics.
#[must_use]
pub fn collaborators_failed_text(raw_response: &str) -> String {
    format!("❌ Hata: İşbirlikçi bilgileri alınamadı. API Response: {raw_response}")
}

/// Error text for a successful collaborator response that is missing
/// the expected profile object.
#[must_use]
pub fn profile_unavailable_text() -> String {
    "❌ Hata: Profil bilgileri alınamadı. API response'unda profile objesi bulunamadı."
        .to_string()
}

/// Error text wrapping a transport or decode failure.
#[must_use]
pub fn tool_failure_text(message: &str) -> String {
    format!("❌ Hata: {message}")
}

/// Render a successful search response as a numbered profile list with
/// a query summary header.
#[must_use]
pub fn format_search_results(queried_name: &str, response: &SearchResponse) -> String {
    let mut output = String::from("🔍 YOK Akademik Arama Sonuçları\n\n");
    output.push_str(&format!("Aranan: {queried_name}\n"));
    output.push_str(&format!("Toplam Sonuç: {}\n", response.total_profiles));
    output.push_str(&format!("Session ID: {}\n\n", response.session_id));

    if response.profiles.is_empty() {
        output.push_str("❌ Hiç sonuç bulunamadı.\n");
        return output;
    }

    output.push_str(&format!("📋 Bulunan Profiller ({}):\n\n", response.profiles.len()));
    for (index, profile) in response.profiles.iter().enumerate() {
        output.push_str(&format_profile_entry(profile, index + 1));
    }

    output
}

fn format_profile_entry(profile: &Profile, index: usize) -> String {
    let mut entry = format!("{}. {} (ID: {})\n", index, profile.name, profile.id);
    entry.push_str(&format!("   📚 Unvan: {}\n", profile.title));
    entry.push_str(&format!("   🏫 Kurum: {}\n", profile.header));
    entry.push_str(&format!("   📧 E-posta: {}\n", or_unspecified(&profile.email)));
    entry.push_str(&format!("   🏷️ Alan: {}\n", or_unspecified(&profile.green_label)));
    entry.push_str(&format!("   🔬 Uzmanlık: {}\n", or_unspecified(&profile.blue_label)));
    if !profile.keywords.is_empty() {
        entry.push_str(&format!("   🔑 Anahtar Kelimeler: {}\n", profile.keywords));
    }
    entry.push_str(&format!("   🔗 Profil: {}\n\n", profile.url));
    entry
}

/// Render a successful collaborator response: origin profile details,
/// an analysis summary, then a numbered collaborator list.
///
/// The caller has already established that `profile` is present.
#[must_use]
pub fn format_collaborator_report(profile: &Profile, response: &CollaboratorsResponse) -> String {
    let mut output = String::from("🤝 Akademik İşbirlikçi Analizi\n\n");
    output.push_str(&format!("Ana Profil: {} (ID: {})\n", profile.name, profile.id));
    output.push_str(&format!("Unvan: {}\n", profile.title));
    output.push_str(&format!("Kurum: {}\n", profile.header));
    output.push_str(&format!("E-posta: {}\n", or_unspecified(&profile.email)));
    output.push_str(&format!("Alan: {}\n", or_unspecified(&profile.green_label)));
    output.push_str(&format!("Uzmanlık: {}\n", or_unspecified(&profile.blue_label)));
    if !profile.keywords.is_empty() {
        output.push_str(&format!("Anahtar Kelimeler: {}\n", profile.keywords));
    }
    output.push_str(&format!("Profil URL: {}\n\n", profile.url));

    output.push_str("📊 İşbirlikçi Analizi:\n");
    output.push_str(&format!("Toplam İşbirlikçi: {}\n", response.total_collaborators));
    output.push_str(&format!("Durum: {}\n", response.status));
    output.push_str(&format!(
        "Tamamlanma: {}\n\n",
        if response.completed { "✅ Tamamlandı" } else { "⏳ Devam ediyor" }
    ));

    if response.collaborators.is_empty() {
        output.push_str("❌ İşbirlikçi bulunamadı.\n");
        return output;
    }

    output.push_str(&format!("👥 İşbirlikçiler ({}):\n\n", response.collaborators.len()));
    for (index, collaborator) in response.collaborators.iter().enumerate() {
        output.push_str(&format_collaborator_entry(collaborator, index + 1));
    }

    output
}

fn format_collaborator_entry(collaborator: &Collaborator, index: usize) -> String {
    let mut entry = format!("{}. {} (ID: {})\n", index, collaborator.name, collaborator.id);
    entry.push_str(&format!("   📚 Unvan: {}\n", collaborator.title));
    entry.push_str(&format!("   🏫 Kurum: {}\n", collaborator.info));
    entry.push_str(&format!("   📧 E-posta: {}\n", or_unspecified(&collaborator.email)));
    entry.push_str(&format!("   🏷️ Alan: {}\n", or_unspecified(&collaborator.green_label)));
    entry.push_str(&format!("   🔬 Uzmanlık: {}\n", or_unspecified(&collaborator.blue_label)));
    if !collaborator.keywords.is_empty() {
        entry.push_str(&format!("   🔑 Anahtar Kelimeler: {}\n", collaborator.keywords));
    }
    entry.push_str(&format!("   🔗 Profil: {}\n", collaborator.url));
    entry.push_str(&format!("   📊 Durum: {}\n\n", collaborator.status));
    entry
}
