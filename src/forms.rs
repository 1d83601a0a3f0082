// src/forms.rs — review form handed to the hosted form service (Netlify forms)
//
// The host matches submissions on the hidden `form-name` field. Its reply is not
// read: once the POST is issued the visitor gets the thank-you state.

use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please write a few words for your review.")]
    MissingMessage,
    #[error("could not send form: {0}")]
    Send(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewForm {
    pub name: String,
    pub service: String,
    pub message: String,
}

impl ReviewForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body, discriminator first.
    pub fn encode(&self, form_name: &str) -> String {
        [
            ("form-name", form_name),
            ("name", self.name.as_str()),
            ("service", self.service.as_str()),
            ("message", self.message.as_str()),
        ]
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

// form encoding spells spaces as '+'
fn encode_component(v: &str) -> String {
    urlencoding::encode(v).replace("%20", "+")
}

pub async fn submit(form_name: &str, form: &ReviewForm) -> Result<(), FormError> {
    form.validate()?;
    Request::post("/")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode(form_name))
        .map_err(|e| FormError::Send(e.to_string()))?
        .send()
        .await
        .map_err(|e| FormError::Send(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_message_are_required() {
        let mut f = ReviewForm::default();
        assert_eq!(f.validate(), Err(FormError::MissingName));
        f.name = "Dana".into();
        f.message = "   ".into();
        assert_eq!(f.validate(), Err(FormError::MissingMessage));
        f.message = "Fast tow, friendly driver.".into();
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn encodes_with_hidden_form_name() {
        let f = ReviewForm {
            name: "Dana R.".into(),
            service: "Tow".into(),
            message: "5/5 & on time!".into(),
        };
        assert_eq!(
            f.encode("blackout-reviews"),
            "form-name=blackout-reviews&name=Dana+R.&service=Tow&message=5%2F5+%26+on+time%21"
        );
    }

    #[test]
    fn blank_service_is_still_sent() {
        let f = ReviewForm {
            name: "Sam".into(),
            service: String::new(),
            message: "ok".into(),
        };
        assert!(f.encode("blackout-reviews").contains("&service=&"));
    }

    #[test]
    fn index_html_declares_every_posted_field() {
        let html = include_str!("../index.html");
        let form = format!(r#"<form name="{}" netlify"#, crate::config::REVIEW_FORM);
        let start = html.find(&form).expect("static review form in index.html");
        let end = start + html[start..].find("</form>").unwrap();
        let declared = &html[start..end];

        let body = ReviewForm::default().encode(crate::config::REVIEW_FORM);
        for field in body.split('&').filter_map(|kv| kv.split('=').next()) {
            if field == "form-name" {
                continue;
            }
            assert!(
                declared.contains(&format!(r#"name="{field}""#)),
                "index.html form is missing `{field}`"
            );
        }
    }
}
