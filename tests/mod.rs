mod fake_backend;
