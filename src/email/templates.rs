/**
 * Notification Email Templates
 *
 * One function per notification, each returning the subject line and HTML
 * body. Templates are deliberately plain HTML fragments; rendering and
 * styling belong to the mail client.
 */

/// A rendered notification ready to hand to the mailer.
#[derive(Debug, Clone)]
pub struct Email {
    pub subject: String,
    pub html: String,
}

/// Display name for a user: their name when set, their email otherwise.
fn display_name(name: Option<&str>, email: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => email.to_string(),
    }
}

/// Welcome email sent on self-registration.
pub fn welcome(name: Option<&str>, email: &str) -> Email {
    Email {
        subject: "Welcome to Northbridge Solutions!".to_string(),
        html: format!(
            "<h1>Welcome, {}!</h1>\
             <p>Thank you for creating an account with Northbridge Solutions. \
             We are excited to have you on board.</p>\
             <p>Best regards,<br/>The Northbridge Solutions Team</p>",
            display_name(name, email)
        ),
    }
}

/// Notification sent when an admin creates an account for someone.
pub fn account_created(name: Option<&str>, email: &str, role: &str) -> Email {
    Email {
        subject: "Your Account at Northbridge Solutions".to_string(),
        html: format!(
            "<h1>Welcome, {}!</h1>\
             <p>An account has been created for you at Northbridge Solutions \
             with the role: <strong>{}</strong>.</p>\
             <p>You can now log in using your email and the password you were \
             given.</p>\
             <p>Best regards,<br/>The Northbridge Solutions Team</p>",
            display_name(name, email),
            role
        ),
    }
}

/// Confirmation sent to an applicant when their application is received.
pub fn application_received(applicant_name: &str, job_title: &str) -> Email {
    Email {
        subject: format!("Application Received for {}", job_title),
        html: format!(
            "<h1>Thank you for your application, {}!</h1>\
             <p>We have received your application for the <strong>{}</strong> \
             position.</p>\
             <p>We will review your application and get back to you soon.</p>\
             <p>Best regards,<br/>The Northbridge Solutions Recruitment Team</p>",
            applicant_name, job_title
        ),
    }
}

/// Notification sent to the admin address when a new application arrives.
pub fn application_notification(
    job_title: &str,
    applicant_name: &str,
    applicant_email: &str,
    resume_url: &str,
    cover_letter: Option<&str>,
) -> Email {
    Email {
        subject: format!("New Job Application for {}", job_title),
        html: format!(
            "<h1>New Job Application Received!</h1>\
             <p><strong>Position:</strong> {}</p>\
             <p><strong>Applicant Name:</strong> {}</p>\
             <p><strong>Applicant Email:</strong> {}</p>\
             <p><strong>Resume:</strong> <a href=\"{}\">Download Resume</a></p>\
             <p><strong>Cover Letter:</strong></p>\
             <p>{}</p>\
             <p>Please log in to the admin dashboard to view and manage \
             applications.</p>",
            job_title,
            applicant_name,
            applicant_email,
            resume_url,
            cover_letter.unwrap_or("N/A")
        ),
    }
}

/// Status-change notification sent to an applicant.
pub fn application_status_update(applicant_name: &str, job_title: &str, status: &str) -> Email {
    Email {
        subject: format!("Your Application for {} has been Updated", job_title),
        html: format!(
            "<h1>Dear {},</h1>\
             <p>Your application for the <strong>{}</strong> position has been \
             updated.</p>\
             <p>Current Status: <strong>{}</strong></p>\
             <p>We will notify you of any further updates.</p>\
             <p>Best regards,<br/>The Northbridge Solutions Recruitment Team</p>",
            applicant_name, job_title, status
        ),
    }
}

/// Broadcast sent to every user when an announcement is published.
pub fn announcement(title: &str, content: &str) -> Email {
    Email {
        subject: format!("New Announcement: {}", title),
        html: format!(
            "<h1>{}</h1>\
             <p>{}</p>\
             <p>Check out more announcements on our website!</p>",
            title, content
        ),
    }
}

/// Notification sent to the admin address for a new contact message.
pub fn contact_notification(name: &str, email: &str, subject: &str, message: &str) -> Email {
    Email {
        subject: format!("New Contact Message: {}", subject),
        html: format!(
            "<h1>New Contact Message from {} ({})</h1>\
             <p><strong>Subject:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>\
             <p>Please log in to the admin dashboard to view and manage \
             messages.</p>",
            name, email, subject, message
        ),
    }
}
