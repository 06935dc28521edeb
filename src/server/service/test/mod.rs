mod booking;
mod pro_dashboard;
