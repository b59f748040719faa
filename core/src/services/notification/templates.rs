//! HTML email templates
//!
//! Every user-supplied value passes through [`escape_html`] before it is
//! interpolated. Message bodies additionally have their line breaks turned
//! into `<br>`.

use crate::domain::entities::submission::{ContactSubmission, EnquirySubmission};
use crate::domain::value_objects::email_message::EmailMessage;
use crate::services::contact::NotificationConfig;

const OTP_SUBJECT: &str = "OTP Verification - Anant Polymers Contact Form";
const ENQUIRY_SUBJECT: &str = "New Enquiry - Anant Polymers";

const SIGNATURE: &str = r#"<p style="color: #666; font-size: 14px;">
          Anant Polymers<br>
          A-65, Swastik industrial park, Kuha, Ahmedabad, BHARAT (India)<br>
          Phone: +91 79902 46779
        </p>"#;

/// Escape the five HTML-significant characters
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped text with `\r\n` / `\n` rendered as `<br>`
fn multiline(value: &str) -> String {
    escape_html(value).replace("\r\n", "\n").replace('\n', "<br>")
}

/// Subject lines are single-line headers
fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

/// The email carrying a freshly issued code
pub fn otp_email(config: &NotificationConfig, to: &str, code: &str, validity_minutes: i64) -> EmailMessage {
    let html = format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
        <h2 style="color: #333;">OTP Verification</h2>
        <p>Thank you for contacting Anant Polymers. Please use the following OTP to verify your email address:</p>
        <div style="background-color: #f4f4f4; padding: 20px; text-align: center; margin: 20px 0;">
          <h1 style="color: #007bff; font-size: 32px; margin: 0; letter-spacing: 5px;">{code}</h1>
        </div>
        <p>This OTP is valid for {validity_minutes} minutes. If you didn't request this, please ignore this email.</p>
        <hr style="margin: 30px 0;">
        {signature}
      </div>
    "#,
        code = escape_html(code),
        validity_minutes = validity_minutes,
        signature = SIGNATURE,
    );

    EmailMessage::new(&config.otp_sender, to, OTP_SUBJECT, html)
}

/// Notification to the sales inbox for a verified contact submission
pub fn contact_notification(config: &NotificationConfig, form: &ContactSubmission) -> EmailMessage {
    let subject = format!("Contact Form: {} - Anant Polymers", single_line(&form.subject));
    let html = format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
        <h2 style="color: #333;">New Contact Form Submission</h2>
        <div style="background-color: #f9f9f9; padding: 20px; border-radius: 5px;">
          <p><strong>Name:</strong> {name}</p>
          <p><strong>Email:</strong> {email}</p>
          <p><strong>Subject:</strong> {subject}</p>
          <p><strong>Message:</strong></p>
          <p style="background-color: white; padding: 15px; border-radius: 3px; border-left: 4px solid #007bff;">
            {message}
          </p>
        </div>
        <hr style="margin: 30px 0;">
        <p style="color: #666; font-size: 14px;">
          This message was sent from the Anant Polymers contact form.
        </p>
      </div>
    "#,
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        subject = escape_html(&form.subject),
        message = multiline(&form.message),
    );

    EmailMessage::new(
        &config.notification_sender,
        &config.sales_recipient,
        subject,
        html,
    )
}

/// Notification to the sales inbox for a product enquiry
pub fn enquiry_notification(config: &NotificationConfig, form: &EnquirySubmission) -> EmailMessage {
    let html = format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
        <h2 style="color: #333;">New Product Enquiry</h2>
        <div style="background-color: #f9f9f9; padding: 20px; border-radius: 5px;">
          <p><strong>Name:</strong> {name}</p>
          <p><strong>Email:</strong> {email}</p>
          <p><strong>Phone:</strong> {phone}</p>
          <p><strong>Product Interest:</strong> {product}</p>
          <p><strong>Message:</strong></p>
          <p style="background-color: white; padding: 15px; border-radius: 3px; border-left: 4px solid #ed5145;">
            {message}
          </p>
        </div>
        <hr style="margin: 30px 0;">
        <p style="color: #666; font-size: 14px;">
          This enquiry was sent from the Anant Polymers website popup form.
        </p>
      </div>
    "#,
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        phone = escape_html(&form.phone),
        product = escape_html(&form.product),
        message = multiline(&form.message),
    );

    EmailMessage::new(
        &config.notification_sender,
        &config.sales_recipient,
        ENQUIRY_SUBJECT,
        html,
    )
}
