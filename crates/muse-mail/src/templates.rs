//! HTML email bodies.

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f9f9f9;">
  <div style="max-width: 600px; margin: 0 auto; background-color: white; padding: 40px 20px;">
{content}
  </div>
</body>
</html>
"#
    )
}

/// Body of the email forwarded to the inbox for a contact form submission.
pub fn contact_html(full_name: &str, email: &str, message: &str) -> String {
    let name = escape_html(full_name);
    let email = escape_html(email);
    let message = escape_html(message);
    let content = format!(
        r#"    <div style="text-align: center; margin-bottom: 30px;">
      <h1 style="color: #800000; font-size: 28px; margin: 0;">New Contact Form Message</h1>
    </div>
    <div style="background-color: #f8f8f8; padding: 30px; border-radius: 8px; margin-bottom: 30px;">
      <h2 style="color: #333; font-size: 22px; margin: 0 0 20px 0;">Contact Details</h2>
      <p style="color: #666; font-size: 16px; line-height: 1.6; margin: 10px 0;"><strong>Name:</strong> {name}</p>
      <p style="color: #666; font-size: 16px; line-height: 1.6; margin: 10px 0;"><strong>Email:</strong> {email}</p>
    </div>
    <div style="margin-bottom: 30px;">
      <h3 style="color: #800000; font-size: 20px; margin: 0 0 15px 0;">Message:</h3>
      <div style="background-color: white; border: 2px solid #eee; padding: 20px; border-radius: 8px;">
        <p style="color: #333; font-size: 16px; line-height: 1.6; margin: 0; white-space: pre-wrap;">{message}</p>
      </div>
    </div>
    <div style="text-align: center; margin-top: 40px; padding-top: 30px; border-top: 1px solid #eee;">
      <p style="color: #999; font-size: 14px; margin: 0;">
        This message was sent from the Muse contact form.<br>
        Reply directly to this email to respond to {name}.
      </p>
    </div>"#
    );
    page("New Contact Form Message", &content)
}

/// Body of the welcome email sent to a new subscriber.
pub fn newsletter_html() -> String {
    let content = r#"    <div style="text-align: center; margin-bottom: 30px;">
      <h1 style="color: #800000; font-size: 32px; margin: 0;">Welcome to Muse!</h1>
    </div>
    <div style="background-color: #f8f8f8; padding: 30px; border-radius: 8px; margin-bottom: 30px;">
      <h2 style="color: #333; font-size: 24px; margin: 0 0 15px 0;">Thank you for subscribing!</h2>
      <p style="color: #666; font-size: 16px; line-height: 1.6; margin: 0;">
        Thank you for subscribing to our newsletter. We will send you updates whenever we have exciting news, new product launches, exclusive offers, and the latest fashion trends.
      </p>
    </div>
    <div style="text-align: center; margin-top: 40px; padding-top: 30px; border-top: 1px solid #eee;">
      <p style="color: #999; font-size: 14px; margin: 0;">
        Best regards,<br>
        Muse Team
      </p>
    </div>"#;
    page("Welcome to Muse Newsletter", content)
}
