//! Portuguese translations (pt-BR)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, ListTexts, ModalTexts, NoticeTexts,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Item Sync",
        cancel: "Cancelar",
        delete: "Excluir",
        error: "Erro",
    },

    form: FormTexts {
        title: "Item",
        name_label: "Nome",
        placeholder: "Digite o nome do item",
        add_item: "Adicionar Item",
        update_item: "Atualizar Item",
        editing: "Editando item",
    },

    list: ListTexts {
        title: "Itens",
        empty: "Nenhum item cadastrado",
        edit: "Editar",
        delete: "Excluir",
    },

    hints: HintTexts {
        switch_panel: "Trocar painel",
        submit: "Salvar",
        cancel_edit: "Cancelar edição",
        select: "Selecionar",
        edit: "Editar",
        delete: "Excluir",
        reload: "Recarregar",
        help: "Ajuda",
        quit: "Sair",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirmar Exclusão",
        confirm_delete_message: "Tem certeza que deseja excluir este item?",
        alert_title: "Atenção",
        press_any_key: "Pressione qualquer tecla para fechar",
        help_title: "Ajuda",
    },

    notice: NoticeTexts {
        empty_name: "Por favor, digite um nome para o item",
        list_failed: "Erro ao carregar itens",
        get_failed: "Erro ao carregar item para edição",
        create_failed: "Erro ao criar item. Verifique a conexão com a API.",
        update_failed: "Erro ao atualizar item.",
        delete_failed: "Erro ao excluir item.",
        unreachable: "Erro ao carregar itens. Verifique se a API está rodando.",
    },

    status_bar: StatusBarTexts {
        last_sync: "Sincronizado",
        never_synced: "Não sincronizado",
    },

    help: HelpTexts {
        global: "Geral",
        form: "Formulário",
        list: "Lista",
        switch_panel: "Alternar entre formulário e lista",
        reload: "Recarregar a lista",
        show_help: "Mostrar esta ajuda",
        quit: "Sair",
        edit_text: "Editar o nome",
        submit: "Adicionar ou atualizar o item",
        cancel_edit: "Cancelar edição",
        select: "Mover seleção",
        edit: "Editar item selecionado",
        delete: "Excluir item selecionado",
        close_hint: "Pressione Esc para fechar a ajuda",
    },
};
