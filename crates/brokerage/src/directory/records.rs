use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::matching::NamedRecord;

/// Business line a team member or deal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Residential,
    CommercialLeasing,
    InvestmentSales,
}

impl Division {
    /// Accepts the labels used across portal exports; unknown labels yield `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        let key: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "residential" | "resi" => Some(Self::Residential),
            "commercial" | "commercialleasing" | "leasing" => Some(Self::CommercialLeasing),
            "investment" | "investmentsales" | "capitalmarkets" => Some(Self::InvestmentSales),
            _ => None,
        }
    }
}

/// Brokerage staff member: agents, coordinators, and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "division_from_label")]
    pub division: Option<Division>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub title: Option<String>,
}

impl NamedRecord for TeamMember {
    fn match_name(&self) -> Option<&str> {
        Some(&self.full_name)
    }
}

/// CRM contact: clients, prospects, and outside brokers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
}

impl NamedRecord for Contact {
    fn match_name(&self) -> Option<&str> {
        Some(&self.full_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub property_address: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "division_from_label")]
    pub division: Option<Division>,
}

/// Contract or marketing template available to agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
}

/// Closed or pending transaction whose agent field is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub property_address: String,
    /// Comma-separated agent names as typed by whoever logged the transaction.
    #[serde(default)]
    pub agent_names: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub closing_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub sale_price: Option<u64>,
}

/// Navigable portal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticPage {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn division_from_label<'de, D>(deserializer: D) -> Result<Option<Division>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    Ok(opt.as_deref().and_then(Division::from_label))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    Ok(opt.as_deref().and_then(parse_date))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    Ok(opt.as_deref().and_then(parse_amount))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn parse_amount(value: &str) -> Option<u64> {
    let digits: String = value
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    let whole = digits.split('.').next().unwrap_or_default();
    whole.parse().ok()
}
