mod test_cli;
