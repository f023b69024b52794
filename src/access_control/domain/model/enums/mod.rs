pub mod access_control_domain_error;
