//! Read-only projections of the dataset used by the public pages, the member
//! area and the admin console.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::activities::{Activity, ActivityStatus};
use crate::models::dataset::Dataset;
use crate::models::members::Member;
use crate::models::messages::Message;
use crate::models::notices::Notice;
use crate::models::settings::SamitySettings;
use crate::models::transactions::Transaction;

/// Shown wherever a record points at a member that no longer exists.
pub const UNKNOWN_MEMBER: &str = "অজানা সদস্য";

/// Paid savings of one member. Withdrawals, penalties and pending entries never count.
pub fn member_savings(dataset: &Dataset, member_id: &str) -> Decimal {
    dataset
        .transactions
        .iter()
        .filter(|t| t.member_id == member_id && t.counts_as_savings())
        .map(|t| t.amount)
        .sum()
}

/// Paid savings across the whole society.
pub fn society_savings(dataset: &Dataset) -> Decimal {
    dataset
        .transactions
        .iter()
        .filter(|t| t.counts_as_savings())
        .map(|t| t.amount)
        .sum()
}

pub fn member_transactions<'a>(dataset: &'a Dataset, member_id: &str) -> Vec<&'a Transaction> {
    dataset
        .transactions
        .iter()
        .filter(|t| t.member_id == member_id)
        .collect()
}

pub fn member_display_name<'a>(dataset: &'a Dataset, member_id: &str) -> &'a str {
    dataset
        .member(member_id)
        .map(|m| m.name.as_str())
        .unwrap_or(UNKNOWN_MEMBER)
}

/// A member's inbox: every message sent from the member's mobile number.
pub fn messages_for_member<'a>(dataset: &'a Dataset, member: &Member) -> Vec<&'a Message> {
    dataset
        .messages
        .iter()
        .filter(|m| m.mobile == member.mobile)
        .collect()
}

pub fn pending_message_count(dataset: &Dataset) -> usize {
    dataset.messages.iter().filter(|m| m.is_pending()).count()
}

pub fn latest_notice(dataset: &Dataset) -> Option<&Notice> {
    dataset.notices.first()
}

#[derive(Debug, Default, PartialEq)]
pub struct ActivityBoard<'a> {
    /// Ongoing and completed work.
    pub current: Vec<&'a Activity>,
    pub planned: Vec<&'a Activity>,
}

pub fn activities_by_status(dataset: &Dataset) -> ActivityBoard<'_> {
    let (planned, current): (Vec<&Activity>, Vec<&Activity>) = dataset
        .activities
        .iter()
        .partition(|a| a.status == ActivityStatus::Planned);
    ActivityBoard { current, planned }
}

pub fn membership_rules(settings: &SamitySettings) -> Vec<&str> {
    settings
        .membership_rules
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub members: usize,
    pub notices: usize,
    pub society_savings: Decimal,
    pub pending_messages: usize,
}

pub fn summary(dataset: &Dataset) -> DatasetSummary {
    DatasetSummary {
        members: dataset.members.len(),
        notices: dataset.notices.len(),
        society_savings: society_savings(dataset),
        pending_messages: pending_message_count(dataset),
    }
}
