//! Built-in export tables
//!
//! One table per exportable entity type of the business platform. Adding an
//! entity means adding a table here and listing it in [`BUILTIN_TABLES`].

use super::config::{ColumnDef, EntityTable};
use super::transform::{CURRENCY, DASH_IF_EMPTY, DATE, DATE_OR_DASH, LIST, NUMBER_OR_ZERO, YES_NO};

pub const USERS: EntityTable = EntityTable {
    entity_type: "users",
    file_name: "users-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Username", "username"),
        ColumnDef::plain("Email", "email"),
        ColumnDef::plain("First_Name", "first_name"),
        ColumnDef::plain("Last_Name", "last_name"),
        ColumnDef::with("Is_Active", "is_active", YES_NO),
        ColumnDef::with("Is_Staff", "is_staff", YES_NO),
        ColumnDef::with("Is_Superuser", "is_superuser", YES_NO),
        ColumnDef::with("Last_Login", "last_login", DATE_OR_DASH),
        ColumnDef::plain("Created_At", "created_at"),
        ColumnDef::plain("Updated_At", "updated_at"),
    ],
};

pub const STAFF: EntityTable = EntityTable {
    entity_type: "staff",
    file_name: "staff-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("First_Name", "user.first_name"),
        ColumnDef::plain("Last_Name", "user.last_name"),
        ColumnDef::plain("Email", "user.email"),
        ColumnDef::with("Phone", "phone_number", DASH_IF_EMPTY),
        ColumnDef::plain("Role", "role.name"),
        ColumnDef::plain("Department", "department"),
        ColumnDef::with("Is_Active", "user.is_active", YES_NO),
        ColumnDef::with("Hire_Date", "hire_date", DATE_OR_DASH),
        ColumnDef::plain("Created_At", "created_at"),
    ],
};

pub const CLIENTS: EntityTable = EntityTable {
    entity_type: "clients",
    file_name: "clients-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Name", "name"),
        ColumnDef::plain("Email", "email"),
        ColumnDef::with("Phone", "phone", DASH_IF_EMPTY),
        ColumnDef::plain("Company", "company_name"),
        ColumnDef::plain("Country", "address.country"),
        ColumnDef::plain("City", "address.city"),
        ColumnDef::plain("Assigned_To", "assigned_to.username"),
        ColumnDef::with("Is_Active", "is_active", YES_NO),
        ColumnDef::with("Created_At", "created_at", DATE),
    ],
};

pub const LEADS: EntityTable = EntityTable {
    entity_type: "leads",
    file_name: "leads-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Name", "name"),
        ColumnDef::plain("Email", "email"),
        ColumnDef::with("Phone", "phone", DASH_IF_EMPTY),
        ColumnDef::plain("Source", "source"),
        ColumnDef::plain("Status", "status"),
        ColumnDef::plain("Assigned_To", "assigned_to.username"),
        ColumnDef::with("Converted", "is_converted", YES_NO),
        ColumnDef::with("Follow_Up", "follow_up_date", DATE_OR_DASH),
        ColumnDef::with("Created_At", "created_at", DATE),
    ],
};

pub const CASES: EntityTable = EntityTable {
    entity_type: "cases",
    file_name: "cases-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Case_Number", "case_number"),
        ColumnDef::plain("Title", "title"),
        ColumnDef::plain("Client", "client.name"),
        ColumnDef::plain("Service", "service.name"),
        ColumnDef::plain("Status", "status"),
        ColumnDef::plain("Priority", "priority"),
        ColumnDef::plain("Assigned_To", "assigned_to.username"),
        ColumnDef::with("Due_Date", "due_date", DATE_OR_DASH),
        ColumnDef::with("Closed_At", "closed_at", DATE_OR_DASH),
        ColumnDef::with("Created_At", "created_at", DATE),
    ],
};

pub const SERVICES: EntityTable = EntityTable {
    entity_type: "services",
    file_name: "services-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Name", "name"),
        ColumnDef::plain("Category", "category.name"),
        ColumnDef::with("Price", "price", CURRENCY),
        ColumnDef::with("Duration_Days", "duration_days", NUMBER_OR_ZERO),
        ColumnDef::with("Is_Active", "is_active", YES_NO),
        ColumnDef::with("Description", "description", DASH_IF_EMPTY),
        ColumnDef::with("Created_At", "created_at", DATE),
    ],
};

pub const SUBSCRIPTIONS: EntityTable = EntityTable {
    entity_type: "subscriptions",
    file_name: "subscriptions-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Client", "client.name"),
        ColumnDef::plain("Plan", "plan.name"),
        ColumnDef::with("Amount", "plan.price", CURRENCY),
        ColumnDef::plain("Billing_Cycle", "billing_cycle"),
        ColumnDef::plain("Status", "status"),
        ColumnDef::with("Auto_Renew", "auto_renew", YES_NO),
        ColumnDef::with("Start_Date", "start_date", DATE),
        ColumnDef::with("End_Date", "end_date", DATE_OR_DASH),
    ],
};

pub const PAYMENTS: EntityTable = EntityTable {
    entity_type: "payments",
    file_name: "payments-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Reference", "reference"),
        ColumnDef::plain("Client", "client.name"),
        ColumnDef::plain("Invoice", "invoice.invoice_number"),
        ColumnDef::with("Amount", "amount", CURRENCY),
        ColumnDef::plain("Currency", "currency"),
        ColumnDef::plain("Method", "payment_method"),
        ColumnDef::plain("Status", "status"),
        ColumnDef::with("Paid_At", "paid_at", DATE_OR_DASH),
    ],
};

pub const INVOICES: EntityTable = EntityTable {
    entity_type: "invoices",
    file_name: "invoices-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Invoice_Number", "invoice_number"),
        ColumnDef::plain("Client", "client.name"),
        ColumnDef::with("Subtotal", "subtotal", CURRENCY),
        ColumnDef::with("Tax", "tax_amount", CURRENCY),
        ColumnDef::with("Total", "total_amount", CURRENCY),
        ColumnDef::plain("Status", "status"),
        ColumnDef::with("Issue_Date", "issue_date", DATE),
        ColumnDef::with("Due_Date", "due_date", DATE_OR_DASH),
    ],
};

pub const ORDERS: EntityTable = EntityTable {
    entity_type: "orders",
    file_name: "orders-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Order_Number", "order_number"),
        ColumnDef::plain("Customer", "customer.name"),
        ColumnDef::plain("Customer_Email", "customer.email"),
        ColumnDef::with("Items", "items_count", NUMBER_OR_ZERO),
        ColumnDef::with("Total", "total_amount", CURRENCY),
        ColumnDef::plain("Status", "status"),
        ColumnDef::with("Is_Paid", "is_paid", YES_NO),
        ColumnDef::with("Created_At", "created_at", DATE),
    ],
};

pub const DOCUMENTS: EntityTable = EntityTable {
    entity_type: "documents",
    file_name: "documents-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Title", "title"),
        ColumnDef::plain("Type", "document_type"),
        ColumnDef::plain("Case", "case.case_number"),
        ColumnDef::plain("Uploaded_By", "uploaded_by.username"),
        ColumnDef::with("Size_Bytes", "file_size", NUMBER_OR_ZERO),
        ColumnDef::with("Tags", "tags", LIST),
        ColumnDef::with("Is_Verified", "is_verified", YES_NO),
        ColumnDef::with("Uploaded_At", "created_at", DATE),
    ],
};

pub const NOTIFICATIONS: EntityTable = EntityTable {
    entity_type: "notifications",
    file_name: "notifications-list.csv",
    columns: &[
        ColumnDef::plain("ID", "id"),
        ColumnDef::plain("Title", "title"),
        ColumnDef::plain("Message", "message"),
        ColumnDef::plain("Type", "notification_type"),
        ColumnDef::plain("Recipient", "recipient.username"),
        ColumnDef::with("Is_Read", "is_read", YES_NO),
        ColumnDef::with("Read_At", "read_at", DATE_OR_DASH),
        ColumnDef::with("Created_At", "created_at", DATE),
    ],
};

/// All built-in tables
pub const BUILTIN_TABLES: &[EntityTable] = &[
    USERS,
    STAFF,
    CLIENTS,
    LEADS,
    CASES,
    SERVICES,
    SUBSCRIPTIONS,
    PAYMENTS,
    INVOICES,
    ORDERS,
    DOCUMENTS,
    NOTIFICATIONS,
];
