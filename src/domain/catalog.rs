use crate::domain::models::CommandId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTemplate {
    pub name: &'static str,
    /// May contain `<token>` placeholders.
    pub command: &'static str,
    pub description: &'static str,
    pub editable: bool,
    /// Hint shown in the empty substitution input.
    pub placeholder: Option<&'static str>,
}

impl CommandTemplate {
    #[must_use]
    pub const fn fixed(
        name: &'static str,
        command: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            command,
            description,
            editable: false,
            placeholder: None,
        }
    }

    #[must_use]
    pub const fn templated(
        name: &'static str,
        command: &'static str,
        description: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            command,
            description,
            editable: true,
            placeholder: Some(placeholder),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [CommandTemplate],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    #[must_use]
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(GIT_COMMANDS)
    }

    #[must_use]
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    #[must_use]
    pub fn get(&self, id: CommandId) -> Option<&'static CommandTemplate> {
        self.categories.get(id.category)?.items.get(id.item)
    }

    /// Total number of templates across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = CommandId> + '_ {
        self.categories.iter().enumerate().flat_map(|(c, category)| {
            (0..category.items.len()).map(move |i| CommandId::new(c, i))
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub const GIT_COMMANDS: &[Category] = &[
    Category {
        name: "Basic Commands",
        items: &[
            CommandTemplate::fixed(
                "Initialize Repository",
                "git init",
                "Create an empty Git repository or reinitialize an existing one",
            ),
            CommandTemplate::templated(
                "Stage Changes",
                "git add <file-name>",
                "Add file contents to the staging area",
                "file-name",
            ),
            CommandTemplate::fixed(
                "Stage All Changes",
                "git add .",
                "Add all modified and new files to the staging area",
            ),
            CommandTemplate::templated(
                "Commit Changes",
                "git commit -m \"<message>\"",
                "Record changes to the repository",
                "commit message",
            ),
            CommandTemplate::templated(
                "Amend Last Commit",
                "git commit --amend -m \"<new-message>\"",
                "Modify the last commit with new changes and/or message",
                "new message",
            ),
            CommandTemplate::fixed(
                "View Status",
                "git status",
                "Show the status of working directory and staging area",
            ),
        ],
    },
    Category {
        name: "Branch Operations",
        items: &[
            CommandTemplate::fixed("List Branches", "git branch", "List all local branches"),
            CommandTemplate::templated(
                "Create Branch",
                "git branch <branch-name>",
                "Create a new branch",
                "branch-name",
            ),
            CommandTemplate::templated(
                "Switch Branch",
                "git checkout <branch-name>",
                "Switch to a different branch",
                "branch-name",
            ),
            CommandTemplate::templated(
                "Create & Switch Branch",
                "git checkout -b <branch-name>",
                "Create a new branch and switch to it",
                "branch-name",
            ),
            CommandTemplate::templated(
                "Delete Branch",
                "git branch -d <branch-name>",
                "Delete a branch",
                "branch-name",
            ),
            CommandTemplate::templated(
                "Rename Branch",
                "git branch -m <new-branch-name>",
                "Rename the current branch",
                "new-branch-name",
            ),
        ],
    },
    Category {
        name: "Remote Operations",
        items: &[
            CommandTemplate::templated(
                "Add Remote",
                "git remote add <remote-name> <repository-url>",
                "Add a new remote repository",
                "remote-name repository-url",
            ),
            CommandTemplate::templated(
                "Set Upstream URL",
                "git remote set-url <remote-name> <new-url>",
                "Change the URL of an existing remote",
                "remote-name new-url",
            ),
            CommandTemplate::templated(
                "Push Changes",
                "git push <remote-name> <branch-name>",
                "Upload local repository content to a remote repository",
                "remote-name branch-name",
            ),
            CommandTemplate::templated(
                "Set Upstream Branch",
                "git push -u <remote-name> <branch-name>",
                "Push and set the upstream branch",
                "remote-name branch-name",
            ),
            CommandTemplate::templated(
                "Pull Changes",
                "git pull <remote-name> <branch-name>",
                "Fetch and integrate with another repository or branch",
                "remote-name branch-name",
            ),
            CommandTemplate::templated(
                "Remove Remote",
                "git remote remove <remote-name>",
                "Remove a remote repository",
                "remote-name",
            ),
        ],
    },
    Category {
        name: "Advanced Operations",
        items: &[
            CommandTemplate::templated(
                "Interactive Rebase",
                "git rebase -i HEAD~<number>",
                "Interactively rebase the last N commits",
                "number",
            ),
            CommandTemplate::templated(
                "Rebase onto Branch",
                "git rebase <branch-name>",
                "Rebase current branch onto another branch",
                "branch-name",
            ),
            CommandTemplate::templated(
                "Cherry Pick",
                "git cherry-pick <commit-hash>",
                "Apply changes from a specific commit",
                "commit-hash",
            ),
            CommandTemplate::templated(
                "Reset Commit",
                "git reset --soft <commit-hash>",
                "Reset to a specific commit while keeping changes in staging",
                "commit-hash",
            ),
        ],
    },
    Category {
        name: "Configuration",
        items: &[
            CommandTemplate::templated(
                "Set Username",
                "git config --global user.name \"<username>\"",
                "Set your Git username",
                "username",
            ),
            CommandTemplate::templated(
                "Set Email",
                "git config --global user.email \"<email>\"",
                "Set your Git email",
                "email",
            ),
            CommandTemplate::fixed(
                "List Configuration",
                "git config --list",
                "Show all configuration settings",
            ),
            CommandTemplate::templated(
                "Set Default Editor",
                "git config --global core.editor \"<editor-name>\"",
                "Set the default editor for Git",
                "editor-name",
            ),
        ],
    },
];
