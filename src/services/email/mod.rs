//! 이메일 발송 모듈

pub mod email_service;
pub mod templates;

pub use email_service::{MailSender, SmtpMailer};
