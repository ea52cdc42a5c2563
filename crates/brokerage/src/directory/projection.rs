use crate::search::Projection;

use super::records::{Contact, Deal, StaticPage, TeamMember, Template};

pub(crate) fn page_fields(page: &StaticPage) -> Vec<Option<&str>> {
    vec![Some(page.title), Some(page.description)]
}

pub(crate) fn project_page(page: &StaticPage) -> Projection {
    Projection {
        id: page.id.to_string(),
        title: page.title.to_string(),
        subtitle: Some(page.description.to_string()),
        target: page.path.to_string(),
    }
}

pub(crate) fn contact_fields(contact: &Contact) -> Vec<Option<&str>> {
    vec![
        Some(contact.full_name.as_str()),
        contact.company.as_deref(),
        contact.email.as_deref(),
    ]
}

pub(crate) fn project_contact(contact: &Contact) -> Projection {
    Projection {
        id: contact.id.clone(),
        title: contact.full_name.clone(),
        subtitle: contact.company.clone().or_else(|| contact.email.clone()),
        target: format!("/contacts/{}", contact.id),
    }
}

pub(crate) fn team_member_fields(member: &TeamMember) -> Vec<Option<&str>> {
    vec![
        Some(member.full_name.as_str()),
        member.email.as_deref(),
        member.title.as_deref(),
    ]
}

pub(crate) fn project_team_member(member: &TeamMember) -> Projection {
    Projection {
        id: member.id.clone(),
        title: member.full_name.clone(),
        subtitle: member.title.clone().or_else(|| member.email.clone()),
        target: format!("/team/{}", member.id),
    }
}

pub(crate) fn deal_fields(deal: &Deal) -> Vec<Option<&str>> {
    vec![
        Some(deal.name.as_str()),
        deal.property_address.as_deref(),
        deal.stage.as_deref(),
    ]
}

pub(crate) fn project_deal(deal: &Deal) -> Projection {
    Projection {
        id: deal.id.clone(),
        title: deal.name.clone(),
        subtitle: deal.property_address.clone(),
        target: format!("/deals/{}", deal.id),
    }
}

pub(crate) fn template_fields(template: &Template) -> Vec<Option<&str>> {
    vec![Some(template.name.as_str()), template.category.as_deref()]
}

pub(crate) fn project_template(template: &Template) -> Projection {
    Projection {
        id: template.id.clone(),
        title: template.name.clone(),
        subtitle: template.category.clone(),
        target: format!("/templates/{}", template.id),
    }
}
